//! `refetch fetch [KEY=VALUE]...` – one decorated fetch against the
//! built-in repository.

use anyhow::{bail, Result};
use refetch_core::fetch::{Fetcher, Flaky, Params, Repository};
use refetch_core::retry::{Retrier, RetryPolicy};

use super::PrintObserver;

pub fn run_fetch(policy: RetryPolicy, raw_params: &[String], flaky: u32, json: bool) -> Result<()> {
    let params = parse_params(raw_params)?;

    let source = Flaky::new(Repository::new(), flaky);
    let retrier = Retrier::new(policy, source).with_observer(PrintObserver);

    let data = retrier.fetch(&params)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        let mut entries: Vec<_> = data.iter().collect();
        entries.sort();
        for (key, value) in entries {
            println!("{key}={value}");
        }
    }
    Ok(())
}

/// Parse `KEY=VALUE` arguments into fetch parameters.
fn parse_params(raw: &[String]) -> Result<Params> {
    let mut params = Params::new();
    for arg in raw {
        match arg.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                params.insert(key.to_string(), value.to_string());
            }
            _ => bail!("malformed parameter {arg:?}, expected KEY=VALUE"),
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_params_key_value_pairs() {
        let raw = vec!["id=1".to_string(), "kind=user".to_string()];
        let params = parse_params(&raw).unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("1"));
        assert_eq!(params.get("kind").map(String::as_str), Some("user"));
    }

    #[test]
    fn parse_params_rejects_missing_separator() {
        assert!(parse_params(&["id".to_string()]).is_err());
    }

    #[test]
    fn parse_params_rejects_empty_key() {
        assert!(parse_params(&["=1".to_string()]).is_err());
    }

    #[test]
    fn parse_params_empty_input_is_empty_map() {
        assert!(parse_params(&[]).unwrap().is_empty());
    }
}
