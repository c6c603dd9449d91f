use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{confirm, parse_contact_ref};
use anyhow::Result;
use clap::{ArgAction, Args};
use phonebook_core::dto::{ContactDetailDto, ContactListDto, ContactListItemDto};
use phonebook_core::{Contact, ContactInput};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
}

#[derive(Debug, Args)]
pub struct EditContactArgs {
    /// List index or contact id
    pub contact: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// List index or contact id
    pub contact: String,
    /// Skip the confirmation prompt
    #[arg(long, short, action = ArgAction::SetTrue)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub term: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// List index or contact id
    pub contact: String,
}

#[derive(Debug, Serialize)]
struct DeleteReport {
    id: String,
    name: String,
    deleted: bool,
}

pub fn add_contact(ctx: &mut Context<'_>, args: AddContactArgs) -> Result<()> {
    let contact = ctx
        .store
        .add(ContactInput::new(args.name, args.phone, args.email))?;
    let index = ctx.store.list_all().len() - 1;

    if ctx.json {
        print_json(&ContactListItemDto::new(index, &contact))?;
    } else {
        println!("created {} {}", contact.id, contact.name);
    }
    Ok(())
}

pub fn edit_contact(ctx: &mut Context<'_>, args: EditContactArgs) -> Result<()> {
    let target = parse_contact_ref(&args.contact)?;
    if args.name.is_none() && args.phone.is_none() && args.email.is_none() {
        return Err(invalid_input("no updates provided"));
    }

    let current = ctx.store.get(target)?;
    let input = ContactInput {
        name: args.name.unwrap_or_else(|| current.name.clone()),
        phone: args.phone.unwrap_or_else(|| current.phone.clone()),
        email: args.email.unwrap_or_else(|| current.email.clone()),
    };
    let index = ctx.store.resolve(target)?;
    let contact = ctx.store.edit(target, input)?;

    if ctx.json {
        print_json(&ContactListItemDto::new(index, &contact))?;
    } else {
        println!("updated {} {}", contact.id, contact.name);
    }
    Ok(())
}

pub fn delete_contact(ctx: &mut Context<'_>, args: DeleteArgs) -> Result<()> {
    let target = parse_contact_ref(&args.contact)?;
    let pending = ctx.store.prepare_delete(target)?;

    let confirmed = args.yes
        || confirm(&format!(
            "Are you sure you want to delete {}?",
            pending.name
        ))?;
    if !confirmed {
        if ctx.json {
            print_json(&DeleteReport {
                id: pending.id.to_string(),
                name: pending.name,
                deleted: false,
            })?;
        } else {
            println!("kept {}", pending.name);
        }
        return Ok(());
    }

    let removed = ctx.store.confirm_delete(pending)?;
    if ctx.json {
        print_json(&DeleteReport {
            id: removed.id.to_string(),
            name: removed.name,
            deleted: true,
        })?;
    } else {
        println!("deleted {} {}", removed.id, removed.name);
    }
    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>) -> Result<()> {
    let contacts = ctx.store.list_all();
    let items: Vec<ContactListItemDto> = contacts
        .iter()
        .enumerate()
        .map(|(index, contact)| ContactListItemDto::new(index, contact))
        .collect();
    print_listing(ctx, contacts.len(), items, None)
}

pub fn search_contacts(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    let hits = ctx.store.search(&args.term)?;
    let items: Vec<ContactListItemDto> = hits
        .into_iter()
        .map(|(index, contact)| ContactListItemDto::new(index, contact))
        .collect();
    print_listing(ctx, ctx.store.list_all().len(), items, Some(args.term.trim()))
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let target = parse_contact_ref(&args.contact)?;
    let index = ctx.store.resolve(target)?;
    let contact: &Contact = ctx.store.get(target)?;
    let detail = ContactDetailDto::new(index, contact);

    if ctx.json {
        return print_json(&detail);
    }

    println!("index: {}", detail.index);
    println!("id: {}", detail.id);
    println!("name: {}", detail.name);
    if detail.phone_display == detail.phone {
        println!("phone: {}", detail.phone);
    } else {
        println!("phone: {} ({})", detail.phone, detail.phone_display);
    }
    println!("email: {}", detail.email);
    Ok(())
}

fn print_listing(
    ctx: &Context<'_>,
    total: usize,
    items: Vec<ContactListItemDto>,
    term: Option<&str>,
) -> Result<()> {
    if ctx.json {
        return print_json(&ContactListDto {
            total,
            displayed: items.len(),
            contacts: items,
        });
    }

    if items.is_empty() {
        match term {
            Some(term) => println!("no contacts found matching '{}'", term),
            None => println!("no contacts"),
        }
    }
    for item in &items {
        println!(
            "{}  {}  {}  {}  {}",
            item.index, item.name, item.phone, item.email, item.id
        );
    }
    println!("Total contacts: {} | Displayed: {}", total, items.len());
    Ok(())
}
