use crate::output::{print_json, print_table};
use atlas_core::{catalog::Catalog, role::Role};

pub fn run(catalog: &Catalog, role: Role, json: bool) -> anyhow::Result<()> {
    let visible = catalog.visible_for(role);

    if json {
        return print_json(&visible);
    }

    if visible.is_empty() {
        println!("Access Restricted");
        println!("Your current clearance level allows for no automated directives.");
        return Ok(());
    }

    println!("Clearance {role}: {} directive(s) available", visible.len());
    println!();

    let rows: Vec<Vec<String>> = visible
        .iter()
        .map(|action| {
            vec![
                action.id.clone(),
                action.action_type.clone(),
                action.label.clone(),
                action.danger_level.to_string(),
                action.required_role.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "TYPE", "DIRECTIVE", "DANGER", "CLEARANCE"], &rows);

    Ok(())
}
