use crystal_basis::engine::query::Query;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryParseError {
    #[error("Invalid query '{0}'. Expected an atom label 'N' or a label range 'N-M'.")]
    InvalidFormat(String),

    #[error("Atom label '{0}' is out of range. Labels start at 1.")]
    LabelOutOfRange(String),
}

fn parse_label(value: &str, query: &str) -> Result<u32, QueryParseError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QueryParseError::InvalidFormat(query.to_string()));
    }
    match value.parse::<u32>() {
        Ok(0) | Err(_) => Err(QueryParseError::LabelOutOfRange(value.to_string())),
        Ok(label) => Ok(label),
    }
}

/// Parses one positional query: `N` or `N-M`.
pub fn parse_query(value: &str) -> Result<Query, QueryParseError> {
    match value.split_once('-') {
        Some((from, to)) => Ok(Query::AtomRange {
            from: parse_label(from, value)?,
            to: parse_label(to, value)?,
        }),
        None => Ok(Query::SingleAtom(parse_label(value, value)?)),
    }
}

/// Builds the ordered, duplicate-free query list for one run.
///
/// Category flags come first (atoms, basis sets, ghosts), then the positional
/// queries in the order given. Invalid and repeated queries are skipped with a
/// warning.
pub fn collect_queries(atoms: bool, basis_sets: bool, ghosts: bool, values: &[String]) -> Vec<Query> {
    let flags = [
        (atoms, Query::AllAtoms),
        (basis_sets, Query::AllBasisSets),
        (ghosts, Query::AllGhosts),
    ];
    let mut queries: Vec<Query> = flags
        .into_iter()
        .filter_map(|(enabled, query)| enabled.then_some(query))
        .collect();

    for value in values {
        match parse_query(value) {
            Ok(query) if queries.contains(&query) => {
                warn!("Skipping duplicated query '{}'.", value);
            }
            Ok(query) => queries.push(query),
            Err(e) => warn!("Skipping query: {}", e),
        }
    }
    queries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parses_single_labels() {
        assert_eq!(parse_query("7"), Ok(Query::SingleAtom(7)));
    }

    #[test]
    fn parses_ranges_in_both_directions() {
        assert_eq!(
            parse_query("2-5"),
            Ok(Query::AtomRange { from: 2, to: 5 })
        );
        assert_eq!(
            parse_query("5-2"),
            Ok(Query::AtomRange { from: 5, to: 2 })
        );
    }

    #[test]
    fn rejects_malformed_queries() {
        for value in ["", "a", "-3", "3-", "1-2-3", "+4", " 4", "1.5"] {
            assert_eq!(
                parse_query(value),
                Err(QueryParseError::InvalidFormat(value.to_string())),
                "query {value:?}"
            );
        }
    }

    #[test]
    fn rejects_zero_and_overflowing_labels() {
        assert_eq!(
            parse_query("0"),
            Err(QueryParseError::LabelOutOfRange("0".into()))
        );
        assert_eq!(
            parse_query("1-99999999999"),
            Err(QueryParseError::LabelOutOfRange("99999999999".into()))
        );
    }

    #[test]
    fn flags_come_first_in_fixed_order() {
        let queries = collect_queries(true, true, true, &strings(&["3"]));
        assert_eq!(
            queries,
            vec![
                Query::AllAtoms,
                Query::AllBasisSets,
                Query::AllGhosts,
                Query::SingleAtom(3),
            ]
        );
    }

    #[test]
    fn invalid_and_duplicated_queries_are_skipped() {
        let queries = collect_queries(
            false,
            true,
            false,
            &strings(&["4", "x", "2-3", "4", "2-3", "3-2"]),
        );
        assert_eq!(
            queries,
            vec![
                Query::AllBasisSets,
                Query::SingleAtom(4),
                Query::AtomRange { from: 2, to: 3 },
                Query::AtomRange { from: 3, to: 2 },
            ]
        );
    }
}
