use crate::prompt::build_prompt;

#[test]
fn test_template_is_byte_exact() {
    let prompt = build_prompt("C", "I");
    assert_eq!(
        prompt,
        "Using the following context:\n---\nC\n---\nPerform this instruction: \"I\""
    );
}

#[test]
fn test_no_escaping_of_inserted_text() {
    let prompt = build_prompt("a \"quoted\" line", "do >> it");
    assert_eq!(
        prompt,
        "Using the following context:\n---\na \"quoted\" line\n---\nPerform this instruction: \"do >> it\""
    );
}

#[test]
fn test_empty_context_keeps_fence_lines() {
    let prompt = build_prompt("", "summarize");
    assert_eq!(
        prompt,
        "Using the following context:\n---\n\n---\nPerform this instruction: \"summarize\""
    );
}
