use super::build::{build_contract, ContractDoc};
use super::types::Contract;
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Load a contract from a JSON or YAML file.
///
/// The format is chosen by file extension: `.yaml`/`.yml` parse as YAML,
/// everything else as JSON. A contract that cannot be read or parsed is a
/// startup-fatal error; callers are expected to abort rather than serve
/// without a contract.
///
/// # Arguments
///
/// * `file_path` - Path to the contract document
///
/// # Returns
///
/// The built [`Contract`] with path declaration order preserved
pub fn load_contract(file_path: impl AsRef<Path>) -> anyhow::Result<Contract> {
    let file_path = file_path.as_ref();
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read contract file {}", file_path.display()))?;

    let ext = file_path.extension().and_then(|e| e.to_str());
    let doc: ContractDoc = if matches!(ext, Some("yaml") | Some("yml")) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML contract in {}", file_path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON contract in {}", file_path.display()))?
    };

    let contract = build_contract(&doc);
    info!(
        file = %file_path.display(),
        templates = contract.paths.len(),
        "contract loaded"
    );
    Ok(contract)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rejects_missing_file() {
        let err = load_contract("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("failed to read contract file"));
    }

    #[test]
    fn test_extension_selects_parser() {
        let dir = tempfile::tempdir().unwrap();

        // The same byte content is valid YAML but invalid JSON.
        let content = "paths:\n  /pet:\n    get: {}\n";

        let yaml_path = dir.path().join("contract.yml");
        std::fs::write(&yaml_path, content).unwrap();
        let contract = load_contract(&yaml_path).unwrap();
        assert!(contract.path_item("/pet").is_some());

        let json_path = dir.path().join("contract.json");
        std::fs::write(&json_path, content).unwrap();
        let err = load_contract(&json_path).unwrap_err();
        assert!(err.to_string().contains("invalid JSON contract"));
    }

    #[test]
    fn test_load_json_contract() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract.json");
        std::fs::write(&path, r#"{"paths":{"/pet/{petId}":{"get":{}}}}"#).unwrap();

        let contract = load_contract(&path).unwrap();
        assert!(contract.path_item("/pet/{petId}").is_some());
    }
}
