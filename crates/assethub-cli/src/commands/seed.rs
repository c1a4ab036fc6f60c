//! Load demo data: catalog entries, a small fleet, and one deployment.

use clap::Args;

use assethub_api::state::{AppState, Registries};
use assethub_core::error::AppError;
use assethub_entity::asset::NewAsset;
use assethub_entity::catalog::{NewAssetModelInfo, NewAssetType};
use assethub_entity::lifecycle::LifecycleAction;
use assethub_entity::org_unit::{NewOrganisationUnit, OrgUnitCategory};
use assethub_entity::person::NewPerson;
use assethub_service::lifecycle::TransitionRequest;

use crate::output;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Also deploy the demo laptop and monitor to the demo person
    #[arg(long, default_value = "true")]
    pub with_deployment: bool,
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;
    let state = AppState::build(config, Registries::postgres(pool));

    println!("Seeding demo data...");

    let engineering = state
        .catalog
        .create_unit(NewOrganisationUnit {
            name: "Engineering".into(),
            category: OrgUnitCategory::Department,
            description: Some("Product engineering".into()),
        })
        .await?;
    let warehouse = state
        .catalog
        .create_unit(NewOrganisationUnit {
            name: "Central Warehouse".into(),
            category: OrgUnitCategory::Warehouse,
            description: None,
        })
        .await?;
    output::print_kv("Units", "Engineering, Central Warehouse");

    let laptop_type = state
        .catalog
        .create_type(NewAssetType {
            name: "Laptop".into(),
            category: Some("computing".into()),
            description: None,
        })
        .await?;
    let monitor_type = state
        .catalog
        .create_type(NewAssetType {
            name: "Monitor".into(),
            category: Some("display".into()),
            description: None,
        })
        .await?;

    let laptop_model = state
        .catalog
        .create_model(NewAssetModelInfo {
            manufacturer: "Lenovo".into(),
            model_number: "ThinkPad T14".into(),
            asset_type_id: laptop_type.id,
            default_description: Some("14\" developer laptop".into()),
        })
        .await?;
    let monitor_model = state
        .catalog
        .create_model(NewAssetModelInfo {
            manufacturer: "Dell".into(),
            model_number: "U2720Q".into(),
            asset_type_id: monitor_type.id,
            default_description: Some("27\" 4K monitor".into()),
        })
        .await?;
    output::print_kv("Models", "ThinkPad T14, Dell U2720Q");

    let mut asset_ids = Vec::new();
    for (tag, model_id) in [
        ("AH-1001", laptop_model.id),
        ("AH-1002", laptop_model.id),
        ("AH-2001", monitor_model.id),
    ] {
        let asset = state
            .assets
            .create(
                NewAsset {
                    asset_tag: Some(tag.into()),
                    serial_number: Some(format!("SN-{tag}")),
                    asset_model_id: model_id,
                    status: None,
                    operation_state: None,
                    purchase_date: None,
                    supplier: Some("CDW".into()),
                    description: None,
                    notes: None,
                    location_id: Some(warehouse.id),
                },
                Some("seed".into()),
            )
            .await?;
        asset_ids.push(asset.id);
    }
    output::print_kv("Assets", "AH-1001, AH-1002, AH-2001");

    let person = state
        .people
        .create(NewPerson {
            full_name: "Demo Person".into(),
            username: Some("demo".into()),
            email: Some("demo@example.com".into()),
            company: None,
            department_id: Some(engineering.id),
            reports_to_id: None,
        })
        .await?;
    output::print_kv("People", &person.full_name);

    if args.with_deployment {
        state
            .cascade
            .dispatch(
                asset_ids[0],
                &TransitionRequest {
                    action: LifecycleAction::Deploy,
                    person_id: Some(person.id),
                    target_location_id: None,
                    expected_return_date: None,
                    primary_device: true,
                    notes: Some("seeded deployment".into()),
                    actor: Some("seed".into()),
                    peripherals: vec![asset_ids[2]],
                },
            )
            .await?;
        output::print_kv("Deployment", "AH-1001 + AH-2001 → Demo Person");
    }

    output::print_success("Demo data loaded.");
    Ok(())
}
