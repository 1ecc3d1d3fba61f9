//! `promptwright templates` — Browse and fill the prompt template catalog.

use std::collections::BTreeMap;

use promptwright_templates::TemplateLibrary;
use tracing::warn;

pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let library = TemplateLibrary::builtin()?;

    println!("📚 Prompt Templates ({})", library.len());
    println!("===================");
    for category in library.categories() {
        println!("\n  [{category}]");
        for template in library.by_category(category) {
            println!("    {:<18} {}", template.id, template.name);
            println!("    {:<18} {}", "", template.description);
        }
    }
    Ok(())
}

pub async fn show(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let template = TemplateLibrary::builtin()?.get(id)?;

    println!("📄 {} ({})", template.name, template.id);
    println!("   Category:  {}", template.category);
    println!("   {}", template.description);
    println!();
    println!("   Variables:");
    for variable in &template.variables {
        let example = template
            .example_values
            .get(variable)
            .map(String::as_str)
            .unwrap_or("");
        println!("     {{{variable}}}  e.g. {example}");
    }
    println!();
    println!("{}", template.template);
    Ok(())
}

pub async fn fill(id: &str, vars: &[String], example: bool) -> Result<(), Box<dyn std::error::Error>> {
    let template = TemplateLibrary::builtin()?.get(id)?;

    let mut values = if example {
        template.example_values.clone()
    } else {
        BTreeMap::new()
    };
    values.extend(parse_vars(vars)?);

    let missing = template.missing_variables(&values);
    if !missing.is_empty() {
        warn!(template = id, missing = ?missing, "Placeholders left unfilled");
    }

    println!("{}", template.fill(&values));
    Ok(())
}

/// Parse repeated `KEY=VALUE` arguments. The value may itself contain `=`.
fn parse_vars(vars: &[String]) -> Result<BTreeMap<String, String>, String> {
    vars.iter()
        .map(|var| match var.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(format!("Invalid --var '{var}', expected KEY=VALUE")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_vars_splits_on_first_equals() {
        let vars = vec!["topic=a=b".to_string(), "audience=devs".to_string()];
        let parsed = parse_vars(&vars).unwrap();
        assert_eq!(parsed["topic"], "a=b");
        assert_eq!(parsed["audience"], "devs");
    }

    #[test]
    fn parse_vars_rejects_missing_key() {
        assert!(parse_vars(&["=value".to_string()]).is_err());
        assert!(parse_vars(&["novalue".to_string()]).is_err());
    }
}
