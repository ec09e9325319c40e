//! `refetch demo` – walk through direct and decorated fetches against the
//! built-in repository.

use anyhow::Result;
use refetch_core::fetch::{Data, Fetcher, Params, Repository};
use refetch_core::retry::{Retrier, RetryPolicy};

use super::PrintObserver;

pub fn run_demo(policy: RetryPolicy) -> Result<()> {
    let repository = Repository::new();

    let mut params = Params::new();
    params.insert("id".to_string(), "1".to_string());

    // A direct fetch, no decoration.
    let data = repository.fetch(&params)?;
    println!("#1 repository.fetch: {}", render(&data));

    // The same contract, decorated. Callers cannot tell the difference
    // except through latency and the attempt log.
    let retrier = Retrier::new(policy, &repository).with_observer(PrintObserver);

    // Empty parameters are rejected by the repository on every attempt, so
    // this exhausts the policy and surfaces the final error.
    match retrier.fetch(&Params::new()) {
        Ok(data) => println!("#2 retrier.fetch: {}", render(&data)),
        Err(err) => println!("#2 retrier.fetch error: {err}"),
    }

    let data = retrier.fetch(&params)?;
    println!("#3 retrier.fetch: {}", render(&data));

    Ok(())
}

fn render(data: &Data) -> String {
    let mut entries: Vec<_> = data.iter().collect();
    entries.sort();
    let pairs: Vec<String> = entries
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_sorts_keys() {
        let mut data = Data::new();
        data.insert("b".to_string(), "2".to_string());
        data.insert("a".to_string(), "1".to_string());
        assert_eq!(render(&data), "{a=1, b=2}");
    }
}
