use super::*;

#[test]
fn module_and_function_docstrings() {
    let source = "\"\"\"Module doc.\"\"\"\n\nimport os\n\n\ndef f():\n    \"\"\"\n    Doc.\n    \"\"\"\n    return os.sep  # sep\n";
    assert_eq!(count("Python", source), stats(3, 4, 3));
}

#[test]
fn triple_quoted_value_is_code() {
    let source = "QUERY = \"\"\"\nSELECT 1 -- x\n\n\"\"\"\n";
    assert_eq!(count("Python", source), stats(4, 0, 0));
}

#[test]
fn hash_comments_and_blank_lines() {
    let source = "# header\n\nx = 1  # inline\n\n# footer\n";
    assert_eq!(count("Python", source), stats(1, 2, 2));
}
