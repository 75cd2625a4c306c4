//! Row parsing for the uploaded `;`-delimited dataset.
//!
//! The dataset is operator-maintained export data, so malformed rows are
//! data-cleaning noise, not batch failures: they are dropped silently and
//! the surviving rows become typed [`UpdateCommand`]s.

use uuid::Uuid;

use crate::types::UpdateCommand;

/// Column separator used by the export tooling.
pub const FIELD_SEPARATOR: char = ';';

/// Minimum number of columns a row must have to be considered.
pub const MIN_COLUMNS: usize = 3;

/// Tokens (case-insensitive, trimmed) that mean "eligible". `ja` is kept
/// for datasets exported from the localized tooling.
pub const AFFIRMATIVE_TOKENS: &[&str] = &["true", "ja"];

/// Parse dataset text into update commands.
///
/// - Lines split on CR/LF; empty lines discarded.
/// - The first surviving line is a header and is skipped unconditionally,
///   with no validation of its column names.
/// - Column 0 must parse as a UUID, else the row is dropped.
/// - Column 1 is reserved (carried by the export for forward compatibility,
///   unused here).
/// - Column 2 becomes the eligibility flag via [`parse_eligibility_flag`].
/// - Rows with fewer than [`MIN_COLUMNS`] columns are dropped.
///
/// The result is fully materialized; the whole document is already in
/// memory by the time this runs.
pub fn parse_update_commands(text: &str) -> Vec<UpdateCommand> {
    text.split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .skip(1)
        .filter_map(parse_row)
        .collect()
}

/// Parse a single data row, returning `None` for malformed rows.
fn parse_row(line: &str) -> Option<UpdateCommand> {
    let columns: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if columns.len() < MIN_COLUMNS {
        return None;
    }

    let record_id = Uuid::parse_str(columns[0].trim()).ok()?;
    let eligibility = parse_eligibility_flag(columns[2]);

    Some(UpdateCommand {
        record_id,
        eligibility,
    })
}

/// Interpret a raw flag cell: any affirmative token is `true`, anything
/// else (including empty) is `false`.
pub fn parse_eligibility_flag(raw: &str) -> bool {
    let trimmed = raw.trim();
    AFFIRMATIVE_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID_A: &str = "11111111-1111-1111-1111-111111111111";
    const ID_B: &str = "22222222-2222-2222-2222-222222222222";

    #[test]
    fn parses_rows_and_drops_malformed_ids() {
        let text = format!("Id;Name;Flag\n{ID_A};Acme;true\nnot-a-guid;Bad;true\n{ID_B};Beta;nein\n");
        let commands = parse_update_commands(&text);

        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].record_id, Uuid::parse_str(ID_A).unwrap());
        assert!(commands[0].eligibility);
        assert_eq!(commands[1].record_id, Uuid::parse_str(ID_B).unwrap());
        assert!(!commands[1].eligibility);
    }

    #[test]
    fn header_is_skipped_even_if_it_looks_like_data() {
        // The first line is dropped unconditionally, no schema check.
        let text = format!("{ID_A};Acme;true\n{ID_B};Beta;true\n");
        let commands = parse_update_commands(&text);

        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].record_id, Uuid::parse_str(ID_B).unwrap());
    }

    #[test]
    fn short_rows_are_dropped() {
        let text = format!("Id;Name;Flag\n{ID_A};OnlyTwoColumns\n{ID_B};Beta;ja\n");
        let commands = parse_update_commands(&text);

        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].record_id, Uuid::parse_str(ID_B).unwrap());
    }

    #[test]
    fn crlf_and_blank_lines_are_tolerated() {
        let text = format!("Id;Name;Flag\r\n\r\n{ID_A};Acme;TRUE\r\n\n");
        let commands = parse_update_commands(&text);

        assert_eq!(commands.len(), 1);
        assert!(commands[0].eligibility);
    }

    #[test]
    fn localized_affirmative_token() {
        assert!(parse_eligibility_flag("ja"));
        assert!(parse_eligibility_flag(" JA "));
        assert!(parse_eligibility_flag("True"));
        assert!(!parse_eligibility_flag("nein"));
        assert!(!parse_eligibility_flag("yes"));
        assert!(!parse_eligibility_flag(""));
    }

    #[test]
    fn extra_columns_are_allowed() {
        let text = format!("Id;Name;Flag;Extra\n{ID_A};Acme;ja;ignored\n");
        let commands = parse_update_commands(&text);

        assert_eq!(commands.len(), 1);
        assert!(commands[0].eligibility);
    }

    #[test]
    fn header_only_dataset_yields_nothing() {
        assert!(parse_update_commands("Id;Name;Flag\n").is_empty());
        assert!(parse_update_commands("").is_empty());
    }
}
