use crate::{CliError, Confirmer};

use std::io::Cursor;

#[test]
fn test_assume_yes_skips_prompt() {
    let mut output = Vec::new();
    let mut confirmer = Confirmer::new(true, Cursor::new(""), &mut output);

    assert!(confirmer.confirm("Delete?").unwrap());
    drop(confirmer);
    assert!(output.is_empty());
}

#[test]
fn test_yes_answers_confirm() {
    for answer in ["y\n", "YES\n", "  yes  \n"] {
        let mut confirmer = Confirmer::new(false, Cursor::new(answer), Vec::new());
        assert!(confirmer.confirm("Delete?").unwrap(), "{answer:?}");
    }
}

#[test]
fn test_anything_else_declines() {
    for answer in ["\n", "n\n", "sure\n", ""] {
        let mut confirmer = Confirmer::new(false, Cursor::new(answer), Vec::new());
        assert!(!confirmer.confirm("Delete?").unwrap(), "{answer:?}");
    }
}

#[test]
fn test_prompt_written_to_output() {
    let mut output = Vec::new();
    let mut confirmer = Confirmer::new(false, Cursor::new("n\n"), &mut output);

    let result = confirmer.require("Delete user u1?");

    assert!(matches!(result, Err(CliError::Cancelled { .. })));
    drop(confirmer);
    assert_eq!(String::from_utf8(output).unwrap(), "Delete user u1? [y/N] ");
}
