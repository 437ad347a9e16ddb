use crate::output::{print_json, print_table};
use atlas_core::{catalog::Catalog, error::AtlasError, role::Role};

pub fn run(catalog: &Catalog, role: Role, action_id: &str, json: bool) -> anyhow::Result<()> {
    let action = catalog.require(action_id)?;

    // The console never renders tiles above the session clearance; neither
    // does this view.
    if !role.can_access(action.required_role) {
        return Err(AtlasError::AuthorizationDenied {
            action: action.id.clone(),
            role: role.to_string(),
        }
        .into());
    }

    if json {
        return print_json(action);
    }

    println!("Directive:   {}", action.label);
    println!("Id:          {}", action.id);
    println!("Type:        {}", action.action_type);
    println!("Danger:      {}", action.danger_level);
    println!("Clearance:   {}", action.required_role);
    if !action.icon.is_empty() {
        println!("Icon:        {}", action.icon);
    }
    println!("Description: {}", action.description);

    if action.parameters.is_empty() {
        return Ok(());
    }

    println!();
    let rows: Vec<Vec<String>> = action
        .parameters
        .iter()
        .map(|param| {
            vec![
                param.id.clone(),
                param.param_type.to_string(),
                if param.required { "yes" } else { "no" }.to_string(),
                param.label.clone(),
                param
                    .options
                    .as_ref()
                    .map(|opts| opts.join(" | "))
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    print_table(&["FIELD", "TYPE", "REQUIRED", "LABEL", "OPTIONS"], &rows);

    Ok(())
}
