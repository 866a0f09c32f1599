//! # Menu Controller
//!
//! Drives the read-dispatch-render loop and owns the session state.
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌───────────────┐   menu printed   ┌────────────────┐                │
//! │   │ MenuDisplayed │ ───────────────► │ AwaitingChoice │                │
//! │   └───────────────┘                  └───────┬────────┘                │
//! │           ▲                                  │ line read               │
//! │           │ "1".."5", invalid                ▼                         │
//! │           │                          ┌────────────────┐   "6"          │
//! │           └───────────────────────── │  Dispatching   │ ──────────┐    │
//! │                                      └────────────────┘           ▼    │
//! │                                                           ┌──────────┐ │
//! │                                                           │ Exiting  │ │
//! │                                                           └──────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each handler returns an [`AppResult`]. [`InventoryApp::process_choice`] is
//! the recovery boundary: a failed handler prints
//! `Exception in <handler>() method: <message>` and the menu comes back.
//! End of input is the exception; it ends the session.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use household_core::{Inventory, Item};

use crate::console::{capitalize, Console};
use crate::error::{AppError, AppResult};
use crate::service::BusinessLogic;
use crate::table::render_table;

const PRESS_ANY_KEY: &str = "\n\nPress any key to continue...";

// =============================================================================
// Menu
// =============================================================================

/// A recognised menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    NewInventory,
    ListInventories,
    SelectInventory,
    ListInventoryItems,
    AddItems,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::NewInventory,
        MenuChoice::ListInventories,
        MenuChoice::SelectInventory,
        MenuChoice::ListInventoryItems,
        MenuChoice::AddItems,
        MenuChoice::Exit,
    ];

    /// Matches the raw input line exactly. `" 1"` and `"1 "` are not choices.
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }

    /// What the operator types to pick this entry.
    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::NewInventory => "1",
            MenuChoice::ListInventories => "2",
            MenuChoice::SelectInventory => "3",
            MenuChoice::ListInventoryItems => "4",
            MenuChoice::AddItems => "5",
            MenuChoice::Exit => "6",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::NewInventory => "New Inventory",
            MenuChoice::ListInventories => "List Inventories",
            MenuChoice::SelectInventory => "Select Inventory",
            MenuChoice::ListInventoryItems => "List Inventory Items",
            MenuChoice::AddItems => "Add Items ",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Where the loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MenuDisplayed,
    AwaitingChoice,
    Dispatching,
    /// Terminal.
    Exiting,
}

/// Per-session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Last confirmed or viewed inventory. `None` until one is chosen.
    pub active_inventory_id: Option<i64>,

    /// Cleared by the exit choice.
    pub keep_going: bool,

    /// Last recognised menu choice.
    pub last_choice: Option<MenuChoice>,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            active_inventory_id: None,
            keep_going: true,
            last_choice: None,
        }
    }
}

// =============================================================================
// Application
// =============================================================================

/// The household inventory menu application.
pub struct InventoryApp<B, R, W> {
    business_logic: B,
    console: Console<R, W>,
    session: Session,
    state: MenuState,
    debug_echo: bool,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<B, R, W> InventoryApp<B, R, W>
where
    B: BusinessLogic,
    R: BufRead,
    W: Write,
{
    /// Creates the application. Debug echo starts enabled.
    pub fn new(business_logic: B, console: Console<R, W>) -> Self {
        InventoryApp {
            business_logic,
            console,
            session: Session::default(),
            state: MenuState::MenuDisplayed,
            debug_echo: true,
            today: local_today,
        }
    }

    /// Enables or disables the diagnostic lines.
    pub fn with_debug_echo(mut self, enabled: bool) -> Self {
        self.debug_echo = enabled;
        self
    }

    /// Overrides the date stamped on new inventories.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn business_logic(&self) -> &B {
        &self.business_logic
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Consumes the application, handing back the business logic.
    pub fn into_business_logic(self) -> B {
        self.business_logic
    }

    /// Runs the menu loop until the operator exits or input ends.
    pub fn start_application(&mut self) -> AppResult<()> {
        info!("Session started");

        while self.session.keep_going {
            match self.menu_round() {
                Ok(()) => {}
                Err(AppError::InputClosed) => {
                    info!("Input closed, ending session");
                    self.session.keep_going = false;
                    self.state = MenuState::Exiting;
                }
                Err(e) => return Err(e),
            }
        }

        info!("Session ended");
        Ok(())
    }

    fn menu_round(&mut self) -> AppResult<()> {
        self.state = MenuState::MenuDisplayed;
        self.console.clear()?;
        self.display_menu()?;

        self.state = MenuState::AwaitingChoice;
        let choice = self.console.prompt("Please enter menu item number: ")?;

        self.process_choice(&choice)
    }

    /// Prints the menu.
    pub fn display_menu(&mut self) -> AppResult<()> {
        self.console.print("\t\t\tHousehold Inventory Application")?;
        self.console.print("")?;
        for choice in MenuChoice::ALL {
            self.console
                .print(&format!("\t\t{}. {}", choice.key(), choice.label()))?;
        }
        self.console.print("")
    }

    /// Dispatches one raw input line.
    ///
    /// Handler failures are reported here and swallowed. Only
    /// [`AppError::InputClosed`] and console write failures are returned.
    pub fn process_choice(&mut self, input: &str) -> AppResult<()> {
        self.echo(&format!("You entered: {}", input))?;
        self.state = MenuState::Dispatching;

        let Some(choice) = MenuChoice::parse(input) else {
            debug!(input, "Unrecognised menu choice");
            self.console.print("Invalid Menu Choice!")?;
            self.state = MenuState::MenuDisplayed;
            return Ok(());
        };

        self.session.last_choice = Some(choice);

        let result = match choice {
            MenuChoice::NewInventory => {
                let result = self.new_inventory();
                self.recover("new_inventory", result)
            }
            MenuChoice::ListInventories => {
                let result = self.list_inventories();
                self.recover("list_inventories", result)
            }
            MenuChoice::SelectInventory => self.select_inventory().map(|_| ()),
            MenuChoice::ListInventoryItems => self.list_inventory_items(),
            MenuChoice::AddItems => {
                let result = self.add_items();
                self.recover("add_items", result)
            }
            MenuChoice::Exit => {
                self.echo("Goodbye!")?;
                self.session.keep_going = false;
                Ok(())
            }
        };

        self.state = if self.session.keep_going {
            MenuState::MenuDisplayed
        } else {
            MenuState::Exiting
        };

        result
    }

    /// Reports a failed handler. End of input passes through.
    fn recover(&mut self, handler: &str, result: AppResult<()>) -> AppResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(AppError::InputClosed) => Err(AppError::InputClosed),
            Err(e) => {
                warn!(handler, error = %e, "Handler failed");
                self.console
                    .print(&format!("Exception in {}() method: {}", handler, e))
            }
        }
    }

    fn echo(&mut self, line: &str) -> AppResult<()> {
        if self.debug_echo {
            self.console.print(line)?;
        }
        Ok(())
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    /// Creates inventories until the operator answers `n`.
    fn new_inventory(&mut self) -> AppResult<()> {
        self.console.clear()?;

        loop {
            self.echo("new_inventory() method called...")?;

            match self.new_inventory_round() {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(AppError::InputClosed) => return Err(AppError::InputClosed),
                Err(e) => {
                    warn!(error = %e, "Inventory creation failed");
                    self.console
                        .print(&format!("\nError creating inventory: {}", e))?;
                }
            }
        }
    }

    /// One pass of the creation loop. `Ok(true)` asks for another round.
    fn new_inventory_round(&mut self) -> AppResult<bool> {
        let name = self
            .console
            .prompt("Enter the name of the new inventory: ")?
            .trim()
            .to_string();
        let description = self
            .console
            .prompt("Enter a description for the new inventory: ")?
            .trim()
            .to_string();

        if name.is_empty() {
            self.console
                .print("Inventory name cannot be empty. Operation canceled. ")?;
            self.console.pause("\nPress any key to continue...")?;
            return Ok(true);
        }

        let created_on = (self.today)();
        let id = self.business_logic.create_new_inventory(
            &name.to_lowercase(),
            &description,
            created_on,
        )?;

        match id {
            Some(id) if id != 0 => self.console.print(&format!(
                "\nInventory '{}' created successfully with ID: {}.",
                name, id
            ))?,
            _ => self
                .console
                .print("\nFailed to create inventory. Please try again.")?,
        }

        let answer = self
            .console
            .prompt("Would you like to add another inventory? (y/n) ")?;
        Ok(capitalize(&answer) != "N")
    }

    fn list_inventories(&mut self) -> AppResult<()> {
        self.console.clear()?;
        self.echo("list_inventories() method called...")?;

        let inventories = self.business_logic.get_all_inventories()?;
        self.print_inventory_list(&inventories)?;

        self.console.pause(PRESS_ANY_KEY)
    }

    /// Asks for an inventory id until the operator confirms it with `y`.
    ///
    /// Failures are reported here and yield `Ok(None)`.
    fn select_inventory(&mut self) -> AppResult<Option<i64>> {
        self.console.clear()?;
        self.echo("select_inventory() method called.")?;

        match self.confirm_inventory_id() {
            Ok(id) => {
                self.session.active_inventory_id = Some(id);
                info!(inventory_id = id, "Inventory selected");
                Ok(Some(id))
            }
            Err(AppError::InputClosed) => Err(AppError::InputClosed),
            Err(e) => {
                warn!(error = %e, "Inventory selection failed");
                self.console
                    .print(&format!("Exception in select_inventory() method: {}", e))?;
                Ok(None)
            }
        }
    }

    fn confirm_inventory_id(&mut self) -> AppResult<i64> {
        let inventories = self.business_logic.get_all_inventories()?;

        loop {
            self.print_inventory_list(&inventories)?;
            let id = self
                .console
                .prompt_int("\n\nSelect inventory id from list: ")?;
            let answer = self
                .console
                .prompt(&format!("You entered {}. Is this correct? (y/n) ", id))?;
            if capitalize(&answer) == "Y" {
                return Ok(id);
            }
        }
    }

    fn list_inventory_items(&mut self) -> AppResult<()> {
        self.console.clear()?;
        self.echo("list_inventory_items() method called...")?;

        let result = self.show_inventory_items();
        self.recover("list_inventory_items", result)?;

        self.console.pause(PRESS_ANY_KEY)
    }

    fn show_inventory_items(&mut self) -> AppResult<()> {
        let inventories = self.business_logic.get_all_inventories()?;
        self.print_inventory_list(&inventories)?;

        let id = self
            .console
            .prompt_int("\n\nSelect inventory id you would like to view: ")?;
        self.session.active_inventory_id = Some(id);

        let items = self.business_logic.get_items_for_inventory_id(id)?;
        self.print_items_list(&items)
    }

    /// Adds items to a freshly selected inventory.
    fn add_items(&mut self) -> AppResult<()> {
        self.echo("add_items() method called...")?;

        let id = self
            .select_inventory()?
            .ok_or(AppError::NoInventorySelected)?;
        let existing = self.business_logic.get_items_for_inventory_id(id)?;
        debug!(inventory_id = id, existing = existing.len(), "Adding items");

        loop {
            self.console.print(&format!("Current inventory ID: {}", id))?;
            let label = self
                .console
                .prompt("Enter the item you would like to add: ")?;
            let count = self.console.prompt_int("Enter the quantity: ")?;
            self.echo(&format!("{}, {}, {}", id, label, count))?;

            match self.business_logic.create_new_item(id, &label, count)? {
                None => self.console.print(&format!(
                    "Successfully added {} {}(s) to ID {} ",
                    count, label, id
                ))?,
                Some(rejection) => {
                    warn!(inventory_id = id, %rejection, "Item not added");
                }
            }

            let answer = self
                .console
                .prompt("Would you like to add another item to this ID? (y/n): ")?;
            if capitalize(&answer) == "N" {
                return self
                    .console
                    .pause("\n\n Items added. Press any key to continue...");
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn print_inventory_list(&mut self, inventories: &[Inventory]) -> AppResult<()> {
        let rows: Vec<Vec<String>> = inventories
            .iter()
            .map(|inv| {
                vec![
                    inv.id.to_string(),
                    inv.name.clone(),
                    inv.description.clone(),
                ]
            })
            .collect();

        self.console
            .print(&render_table(&["ID", "Name", "Description"], &rows))
    }

    fn print_items_list(&mut self, items: &[Item]) -> AppResult<()> {
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|item| {
                vec![
                    item.id.to_string(),
                    item.inventory_id.to_string(),
                    item.label.clone(),
                    item.count.to_string(),
                ]
            })
            .collect();

        self.console
            .print(&render_table(&["ID", "Inventory ID", "Item", "Count"], &rows))
    }
}
