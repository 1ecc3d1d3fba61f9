//! Ready-made example requests, keyed by the category they showcase.

pub const QUICK_EXAMPLES: &[(&str, &str)] = &[
    (
        "Content Creation",
        "Write a blog post about AI ethics for beginners",
    ),
    (
        "Agent Development",
        "Create a customer service chatbot that handles complaints professionally",
    ),
    (
        "Educational",
        "Explain quantum computing to high school students using simple analogies",
    ),
    (
        "Business",
        "Develop a marketing strategy for a new eco-friendly product",
    ),
    (
        "Technical",
        "Write Python code to analyze CSV data and create visualizations",
    ),
];

/// Look up an example request by its label, ignoring case.
pub fn quick_example(label: &str) -> Option<&'static str> {
    QUICK_EXAMPLES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
        .map(|(_, request)| *request)
}
