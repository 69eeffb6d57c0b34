//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::OutlayResult;
use crate::models::{CategoryId, CategoryUpdate};
use crate::store::LedgerStore;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name (1-50 characters)
        name: String,
        /// Icon reference
        #[arg(short, long, default_value = "tag")]
        icon: String,
        /// Display color (hex string)
        #[arg(short, long, default_value = "#6b7280")]
        color: String,
    },

    /// Edit a category
    Edit {
        /// Category id
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New icon
        #[arg(short, long)]
        icon: Option<String>,
        /// New color
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Delete a category (default categories are protected)
    Delete {
        /// Category id
        id: String,
    },
}

/// Handle category commands
pub fn handle_category_command(store: &mut LedgerStore, cmd: CategoryCommands) -> OutlayResult<()> {
    match cmd {
        CategoryCommands::List => {
            println!("{}", format_category_list(store.categories()));
        }

        CategoryCommands::Add { name, icon, color } => {
            let category = store.add_category(&name, &icon, &color)?;
            println!("Created category '{}' ({})", category.name, category.id);
        }

        CategoryCommands::Edit {
            id,
            name,
            icon,
            color,
        } => {
            let update = CategoryUpdate {
                name,
                icon,
                color,
                parent_id: None,
            };

            match store.update_category(&CategoryId::from_raw(id), update)? {
                Some(category) => println!("Updated category '{}'", category.name),
                None => println!("No category with that id; nothing changed."),
            }
        }

        CategoryCommands::Delete { id } => {
            if store.delete_category(&CategoryId::from_raw(id))? {
                println!("Deleted category.");
            } else {
                println!("No category with that id; nothing changed.");
            }
        }
    }

    Ok(())
}
