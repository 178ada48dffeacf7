//! Numbered menus and the actions they dispatch to.

use std::io::{self, Write};

pub const MAIN_BANNER: &str = "====== Main Menu ======";
pub const CUSTOMER_BANNER: &str = "=== Customer Maintenance ===";
pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Try again!";

/// Entries of the main menu, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    NewVideo,
    RentVideo,
    ReturnVideo,
    ShowVideoDetails,
    DisplayAllVideos,
    CheckAvailability,
    CustomerMaintenance,
    Exit,
}

impl MainAction {
    pub const ALL: [MainAction; 8] = [
        MainAction::NewVideo,
        MainAction::RentVideo,
        MainAction::ReturnVideo,
        MainAction::ShowVideoDetails,
        MainAction::DisplayAllVideos,
        MainAction::CheckAvailability,
        MainAction::CustomerMaintenance,
        MainAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainAction::NewVideo => "New Video",
            MainAction::RentVideo => "Rent a Video",
            MainAction::ReturnVideo => "Return a Video",
            MainAction::ShowVideoDetails => "Show Video Details",
            MainAction::DisplayAllVideos => "Display all Videos",
            MainAction::CheckAvailability => "Check Video Availability",
            MainAction::CustomerMaintenance => "Customer Maintenance",
            MainAction::Exit => "Exit Program",
        }
    }
}

impl TryFrom<u32> for MainAction {
    type Error = u32;

    fn try_from(choice: u32) -> Result<Self, Self::Error> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize).copied())
            .ok_or(choice)
    }
}

/// Entries of the customer maintenance submenu, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerAction {
    AddCustomer,
    ShowCustomerDetails,
    ListRentals,
    Back,
}

impl CustomerAction {
    pub const ALL: [CustomerAction; 4] = [
        CustomerAction::AddCustomer,
        CustomerAction::ShowCustomerDetails,
        CustomerAction::ListRentals,
        CustomerAction::Back,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CustomerAction::AddCustomer => "Add New Customer",
            CustomerAction::ShowCustomerDetails => "Show Customer Details",
            CustomerAction::ListRentals => "List of Videos Rented by a Customer",
            CustomerAction::Back => "Go back to Main Menu",
        }
    }
}

impl TryFrom<u32> for CustomerAction {
    type Error = u32;

    fn try_from(choice: u32) -> Result<Self, Self::Error> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize).copied())
            .ok_or(choice)
    }
}

/// Parse an operator's menu entry. Anything but a listed number is `None`.
pub fn parse_choice<A: TryFrom<u32>>(line: &str) -> Option<A> {
    line.trim()
        .parse::<u32>()
        .ok()
        .and_then(|choice| A::try_from(choice).ok())
}

pub fn render_main<W: Write>(out: &mut W) -> io::Result<()> {
    render(out, MAIN_BANNER, MainAction::ALL.iter().map(|a| a.label()))
}

pub fn render_customer<W: Write>(out: &mut W) -> io::Result<()> {
    render(
        out,
        CUSTOMER_BANNER,
        CustomerAction::ALL.iter().map(|a| a.label()),
    )
}

fn render<'a, W: Write>(
    out: &mut W,
    banner: &str,
    labels: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    writeln!(out, "{banner}")?;
    for (index, label) in labels.enumerate() {
        writeln!(out, "[{}] {}", index + 1, label)?;
    }
    Ok(())
}
