use rbdt::ingest::{rules_from_json_str, AttributeDomain};
use rbdt::render::render_tree;
use rbdt::tree::RbdTree;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// Discretised Iris attributes; every value string names its own bin.
fn iris_domain() -> AttributeDomain {
    AttributeDomain::new()
        .with_attribute(0, ["1", "2", "3"]) // petal length
        .with_attribute(1, ["4", "5", "6"]) // petal width
        .with_attribute(2, ["7", "8", "9"]) // sepal length
        .with_attribute(3, ["10", "11", "12"]) // sepal width
}

const RULES: &str = r#"[
    {"Y": "setosa",     "itemsInX": ["1"],       "itemsInZ": ["1", "setosa"],            "freqX": 50, "freqY": 50, "freqZ": 50},
    {"Y": "setosa",     "itemsInX": ["4"],       "itemsInZ": ["4", "setosa"],            "freqX": 49, "freqY": 50, "freqZ": 48},
    {"Y": "setosa",     "itemsInX": ["1", "10"], "itemsInZ": ["1", "10", "setosa"],      "freqX": 22, "freqY": 50, "freqZ": 22},
    {"Y": "versicolor", "itemsInX": ["2", "5"],  "itemsInZ": ["2", "5", "versicolor"],   "freqX": 45, "freqY": 50, "freqZ": 43},
    {"Y": "versicolor", "itemsInX": ["2", "11"], "itemsInZ": ["2", "11", "versicolor"],  "freqX": 30, "freqY": 50, "freqZ": 26},
    {"Y": "versicolor", "itemsInX": ["5", "8"],  "itemsInZ": ["5", "8", "versicolor"],   "freqX": 28, "freqY": 50, "freqZ": 25},
    {"Y": "virginica",  "itemsInX": ["3"],       "itemsInZ": ["3", "virginica"],         "freqX": 46, "freqY": 50, "freqZ": 44},
    {"Y": "virginica",  "itemsInX": ["6"],       "itemsInZ": ["6", "virginica"],         "freqX": 48, "freqY": 50, "freqZ": 45},
    {"Y": "virginica",  "itemsInX": ["3", "9"],  "itemsInZ": ["3", "9", "virginica"],    "freqX": 31, "freqY": 50, "freqZ": 30},
    {"Y": "virginica",  "itemsInX": ["2", "6"],  "itemsInZ": ["2", "6", "virginica"],    "freqX": 6,  "freqY": 50, "freqZ": 5}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Rule-based Decision Tree (Iris) ===");

    let domain = iris_domain();
    let rules = rules_from_json_str(RULES, &domain)?;
    println!("Rules: {}", rules.len());
    for rule in &rules {
        println!("  {}", rule);
    }

    let start = Instant::now();
    let mut tree = RbdTree::default();
    tree.fit(&rules, domain.n_attributes())?;
    println!("Induced in {:.2?}\n", start.elapsed());

    if let Some(root) = tree.root() {
        print!("{}", render_tree(root));
    }
    println!();
    print!("{}", tree.tree_info());

    let queries = [
        ["1", "4", "7", "10"],
        ["2", "5", "8", "11"],
        ["3", "6", "9", "12"],
        ["2", "6", "8", "11"],
    ];
    println!("\nPredictions:");
    for query in &queries {
        println!("  {:?} -> {:?}", query, tree.predict(query));
    }

    Ok(())
}
