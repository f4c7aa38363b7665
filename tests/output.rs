use tick::output::{format_human, HumanOutput};

#[test]
fn format_human_includes_sections() {
    let mut human = HumanOutput::new("Task added");
    human.push_summary("ID", "1");
    human.push_detail("snapshot written");
    human.push_warning("snapshot was missing, starting fresh");
    human.push_next_step("tick list");

    let rendered = format_human(&human);
    assert!(rendered.contains("Task added"));
    assert!(rendered.contains("Summary:"));
    assert!(rendered.contains("- ID: 1"));
    assert!(rendered.contains("Details:"));
    assert!(rendered.contains("- snapshot written"));
    assert!(rendered.contains("Warnings:"));
    assert!(rendered.contains("- snapshot was missing, starting fresh"));
    assert!(rendered.contains("Next steps:"));
    assert!(rendered.contains("- tick list"));
}

#[test]
fn format_human_omits_empty_sections() {
    let human = HumanOutput::new("No tasks.");
    let rendered = format_human(&human);
    assert_eq!(rendered, "No tasks.");
}
