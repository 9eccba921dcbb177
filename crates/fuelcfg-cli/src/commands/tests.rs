//! Unit tests for CLI commands.

use super::*;
use crate::InitFormat;
use tempfile::TempDir;

/// Create a test command context in a temporary directory
fn create_test_context(temp_dir: &TempDir) -> CommandContext {
    CommandContext {
        cwd: Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap(),
        output: crate::output::OutputHandler::new(),
    }
}

#[tokio::test]
async fn test_init_then_check() {
    let temp_dir = tempfile::tempdir().unwrap();
    let ctx = create_test_context(&temp_dir);

    init::execute(InitFormat::Toml, false, &ctx).await.unwrap();
    assert!(ctx.cwd.join("fuels.config.toml").exists());

    check::execute(None, &ctx).await.unwrap();

    let (project, path) = ctx.load_config(None).await.unwrap();
    assert_eq!(path, ctx.cwd.join("fuels.config.toml"));
    assert_eq!(project.output(), ctx.cwd.join("src").join("contracts"));
}

#[tokio::test]
async fn test_init_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let ctx = create_test_context(&temp_dir);

    init::execute(InitFormat::Json, false, &ctx).await.unwrap();

    let path = ctx.cwd.join("fuels.config.json");
    let (project, _) = ctx.load_config(Some(path.as_path())).await.unwrap();
    assert_eq!(project.contracts().len(), 1);
}

#[tokio::test]
async fn test_init_refuses_to_overwrite() {
    let temp_dir = tempfile::tempdir().unwrap();
    let ctx = create_test_context(&temp_dir);
    std::fs::write(ctx.cwd.join("fuels.config.json"), "{}").unwrap();

    let err = init::execute(InitFormat::Toml, false, &ctx).await.unwrap_err();
    assert!(matches!(err, FuelcfgError::AlreadyExists { .. }));
    assert!(!ctx.cwd.join("fuels.config.toml").exists());

    init::execute(InitFormat::Json, true, &ctx).await.unwrap();
    let written = std::fs::read_to_string(ctx.cwd.join("fuels.config.json")).unwrap();
    assert!(written.contains("../contract"));
}

#[tokio::test]
async fn test_check_reports_invalid_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let ctx = create_test_context(&temp_dir);
    std::fs::write(ctx.cwd.join("fuels.config.toml"), "contracts = []\n").unwrap();

    let err = check::execute(None, &ctx).await.unwrap_err();
    assert_eq!(err.field(), Some("contracts"));
}

#[tokio::test]
async fn test_explicit_config_relative_to_cwd() {
    let temp_dir = tempfile::tempdir().unwrap();
    let ctx = create_test_context(&temp_dir);
    std::fs::create_dir_all(ctx.cwd.join("frontend")).unwrap();
    std::fs::write(
        ctx.cwd.join("frontend").join("fuels.config.toml"),
        "contracts = [\"../contract\"]\n",
    )
    .unwrap();

    let (project, _) = ctx
        .load_config(Some(Utf8Path::new("frontend/fuels.config.toml")))
        .await
        .unwrap();
    assert_eq!(project.contracts(), &[ctx.cwd.join("contract")]);
}

#[test]
fn test_show_render() {
    let raw = serde_json::json!({
        "contracts": ["../contract", "../token"],
        "output": "./src/contracts",
    });
    let location = Utf8Path::new("/proj/frontend/fuels.config.toml");
    let project = fuelcfg_config::load(&raw, location).unwrap();

    let text = show::render(&project, location, false).unwrap();
    assert_eq!(
        text,
        "config:     /proj/frontend/fuels.config.toml\n\
         base dir:   /proj/frontend\n\
         contracts:\n  - /proj/contract\n  - /proj/token\n\
         output:     /proj/frontend/src/contracts\n"
    );

    let json: serde_json::Value =
        serde_json::from_str(&show::render(&project, location, true).unwrap()).unwrap();
    assert_eq!(json["contracts"][1], "/proj/token");
    assert_eq!(json["output"], "/proj/frontend/src/contracts");
    assert_eq!(json["scripts"], serde_json::json!([]));
}
