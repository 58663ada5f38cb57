use std::collections::HashMap;

use stratus::prelude::*;
use stratus_datasets::weather;
use stratus_prism::{Prism, RuleSet};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Load the clusterized weather table
    let table = weather();

    // Induce the covering rules
    let model = Prism::params().fit(&table)?;
    let rules = model.rules();

    // One line per rule plus the training accuracy, two decimal places
    print!("{}", rules.report(&table));

    // Persist the rule document for the fuzzy inference stage
    rules.write_json("prism_rules.json")?;
    println!("rules written to prism_rules.json");

    // Reload as the downstream consumer would: strictly validated against
    // the table vocabulary, then majority-voted over all matching rules
    let reloaded = RuleSet::read_json("prism_rules.json")?;
    reloaded.validate(&table)?;

    let mut observation: HashMap<String, AttrValue> = HashMap::new();
    observation.insert("cloud_cover_cat".to_string(), AttrValue::Int(3));
    observation.insert("humidity_cat".to_string(), AttrValue::Int(3));
    observation.insert("pressure_cat".to_string(), AttrValue::Int(0));
    observation.insert("precipitation_cat".to_string(), AttrValue::Int(3));
    observation.insert("sunshine_cat".to_string(), AttrValue::Int(0));
    observation.insert("temp_mean_cat".to_string(), AttrValue::Int(0));

    match reloaded.vote_assignment(&observation) {
        Some(class) => println!("majority vote: Clima={}", class),
        None => println!("majority vote: no prediction"),
    }

    Ok(())
}
