//! Handlers for the `guest` command group.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{AddArgs, ModifyArgs};
use crate::adapter::inbound::cli::output;
use crate::application::guest::GuestService;
use crate::application::report::NO_RECORDS;
use crate::domain::field::GuestField;
use crate::domain::guest::{GuestForm, GuestId, GuestRecord};
use crate::domain::member::MemberType;
use crate::domain::menu::MenuItem;
use crate::domain::money::format_currency;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::store::GuestStore;

#[derive(Tabled)]
struct GuestTableRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "First Name")]
    first_name: String,
    #[tabled(rename = "Last Name")]
    last_name: String,
    #[tabled(rename = "Member Type")]
    member_type: String,
    #[tabled(rename = "Amount Paid")]
    amount_paid: String,
    #[tabled(rename = "Menu Item")]
    menu_item: String,
}

impl From<&GuestRecord> for GuestTableRow {
    fn from(record: &GuestRecord) -> Self {
        Self {
            id: record.id.get(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            member_type: record.member_type.to_string(),
            amount_paid: format_currency(record.amount_paid),
            menu_item: record.menu_item.to_string(),
        }
    }
}

fn ensure_interactive_allowed() -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "interactive prompts cannot be combined with --json".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Register a guest from flags, prompting for the rest with `--interactive`.
pub fn add<S: GuestStore>(service: &GuestService<S>, args: AddArgs) -> Result<()> {
    let form = if args.interactive {
        ensure_interactive_allowed()?;
        prompt_form(args)?
    } else {
        GuestForm {
            first_name: args.first_name.unwrap_or_default(),
            last_name: args.last_name.unwrap_or_default(),
            member_type: args.member_type.unwrap_or_default(),
            amount_paid: args.amount_paid.unwrap_or_default(),
            menu_item: args.menu_item.unwrap_or_default(),
        }
    };

    let id = service.add(&form)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "guest.add",
            "id": id,
        }));
        return Ok(());
    }

    output::success(&format!("Guest {} added", output::highlight(id)));
    Ok(())
}

fn prompt_form(args: AddArgs) -> Result<GuestForm> {
    let theme = ColorfulTheme::default();

    let first_name = match args.first_name {
        Some(name) => name,
        None => Input::with_theme(&theme)
            .with_prompt("First name")
            .interact_text()?,
    };
    let last_name = match args.last_name {
        Some(name) => name,
        None => Input::with_theme(&theme)
            .with_prompt("Last name")
            .interact_text()?,
    };
    let member_type = match args.member_type {
        Some(kind) => kind,
        None => select_member_type(&theme, 0)?.label().to_string(),
    };
    let amount_paid = match args.amount_paid {
        Some(amount) => amount,
        None => Input::with_theme(&theme)
            .with_prompt("Amount paid")
            .allow_empty(true)
            .interact_text()?,
    };
    let menu_item = match args.menu_item {
        Some(item) => item,
        None => select_menu_item(&theme, 0)?.label().to_string(),
    };

    Ok(GuestForm {
        first_name,
        last_name,
        member_type,
        amount_paid,
        menu_item,
    })
}

fn select_member_type(theme: &ColorfulTheme, default: usize) -> Result<MemberType> {
    let labels: Vec<&str> = MemberType::ALL.iter().map(|kind| kind.label()).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Member type")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(MemberType::ALL[index])
}

fn select_menu_item(theme: &ColorfulTheme, default: usize) -> Result<MenuItem> {
    let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Menu item")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(MenuItem::ALL[index])
}

/// Change one field of a guest.
///
/// # Errors
/// Returns [`Error::NoOp`] when neither `--field`/`--value` nor
/// `--interactive` is given.
pub fn modify<S: GuestStore>(service: &GuestService<S>, args: ModifyArgs) -> Result<()> {
    let id = GuestId::new(args.id);

    let (field, value) = if args.interactive {
        ensure_interactive_allowed()?;
        let record = service.details(id)?;
        match prompt_change(&record)? {
            Some(change) => change,
            None => {
                output::note("Menu item unchanged.");
                return Ok(());
            }
        }
    } else {
        match (args.field, args.value) {
            (Some(field), Some(value)) => (field.parse::<GuestField>()?, value),
            _ => return Err(Error::NoOp),
        }
    };

    service.modify(id, field, &value)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "guest.modify",
            "id": id,
            "field": field.column(),
        }));
        return Ok(());
    }

    output::success(&format!(
        "Guest {} updated: {}",
        output::highlight(id),
        field.label()
    ));
    Ok(())
}

/// Ask which field to change and its new value.
///
/// Returns `None` when a menu change is not confirmed.
fn prompt_change(record: &GuestRecord) -> Result<Option<(GuestField, String)>> {
    let theme = ColorfulTheme::default();

    let labels: Vec<&str> = GuestField::ALL.iter().map(|field| field.label()).collect();
    let index = Select::with_theme(&theme)
        .with_prompt(format!("Field to change for {}", record.full_name()))
        .items(&labels)
        .default(0)
        .interact()?;
    let field = GuestField::ALL[index];

    let value = match field {
        GuestField::FirstName => Input::with_theme(&theme)
            .with_prompt(field.label())
            .default(record.first_name.clone())
            .interact_text()?,
        GuestField::LastName => Input::with_theme(&theme)
            .with_prompt(field.label())
            .default(record.last_name.clone())
            .interact_text()?,
        GuestField::AmountPaid => Input::with_theme(&theme)
            .with_prompt(field.label())
            .default(record.amount_paid.to_string())
            .interact_text()?,
        GuestField::MemberType => {
            let current = record
                .member_type
                .known()
                .and_then(|kind| MemberType::ALL.iter().position(|k| *k == kind))
                .unwrap_or(0);
            select_member_type(&theme, current)?.label().to_string()
        }
        GuestField::MenuItem => {
            let current = record
                .menu_item
                .known()
                .and_then(|item| MenuItem::ALL.iter().position(|i| *i == item))
                .unwrap_or(0);
            let item = select_menu_item(&theme, current)?;
            let confirmed = Confirm::with_theme(&theme)
                .with_prompt(format!(
                    "Are you sure you want to change the menu item to {}?",
                    item.label()
                ))
                .default(false)
                .interact()?;
            if !confirmed {
                return Ok(None);
            }
            item.label().to_string()
        }
    };

    Ok(Some((field, value)))
}

pub fn delete<S: GuestStore>(service: &GuestService<S>, id: i64) -> Result<()> {
    let id = GuestId::new(id);
    service.delete(id)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "guest.delete",
            "id": id,
        }));
        return Ok(());
    }

    output::success(&format!("Guest {} deleted", output::highlight(id)));
    Ok(())
}

/// List every guest as a table.
pub fn list<S: GuestStore>(service: &GuestService<S>) -> Result<()> {
    let records = service.list()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "guest.list",
            "guests": records,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        return Ok(());
    }

    if records.is_empty() {
        output::note(NO_RECORDS);
        output::hint(&format!(
            "run {} to register one",
            output::highlight("partyplanner guest add")
        ));
        return Ok(());
    }

    output::section(&format!("Guests ({})", records.len()));
    let rows: Vec<GuestTableRow> = records.iter().map(GuestTableRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}

pub fn show<S: GuestStore>(service: &GuestService<S>, id: i64) -> Result<()> {
    let record = service.details(GuestId::new(id))?;

    if output::is_json() {
        output::json_output(json!({
            "command": "guest.show",
            "guest": record,
        }));
        return Ok(());
    }

    output::section(&record.full_name());
    output::field("ID", record.id);
    output::field("Member Type", &record.member_type);
    output::field("Amount Paid", format_currency(record.amount_paid));
    output::field("Menu Item", &record.menu_item);
    if record.member_type.known().is_none() || record.menu_item.known().is_none() {
        output::warning("stored values outside the known categories are left out of report totals");
    }
    Ok(())
}
