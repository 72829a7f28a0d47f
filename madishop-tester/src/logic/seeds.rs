use anyhow::{Context, Result, bail};

/// Resolve CLI seed tokens into numeric seeds.
///
/// Accepts literal integers and inclusive ranges such as `10..14`.
/// Duplicates are dropped, first occurrence wins.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds: Vec<u64> = Vec::new();
    for token in tokens {
        if let Some((start, end)) = token.split_once("..") {
            let start: u64 = start
                .parse()
                .with_context(|| format!("invalid range start in '{token}'"))?;
            let end: u64 = end
                .parse()
                .with_context(|| format!("invalid range end in '{token}'"))?;
            if end < start {
                bail!("empty seed range '{token}'");
            }
            for seed in start..=end {
                if !seeds.contains(&seed) {
                    seeds.push(seed);
                }
            }
        } else {
            let seed: u64 = token
                .parse()
                .with_context(|| format!("invalid seed '{token}'"))?;
            if !seeds.contains(&seed) {
                seeds.push(seed);
            }
        }
    }
    if seeds.is_empty() {
        bail!("no seeds provided");
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn numeric_and_range_tokens_expand() {
        let seeds = resolve_seed_inputs(&tokens(&["7", "1..3", "2"])).unwrap();
        assert_eq!(seeds, vec![7, 1, 2, 3]);
    }

    #[test]
    fn bad_tokens_are_rejected() {
        assert!(resolve_seed_inputs(&tokens(&["abc"])).is_err());
        assert!(resolve_seed_inputs(&tokens(&["5..2"])).is_err());
        assert!(resolve_seed_inputs(&[]).is_err());
    }
}
