//! Interactive console facade for the rental catalog.
//!
//! The shell reads one field per line, dispatches to [`Catalog`] and prints a
//! confirmation or an error line. It is generic over its input and output so
//! tests can drive it with in-memory buffers.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rental_app::catalog::{Catalog, CatalogError, NewVideo, UNASSIGNED_ID};

pub mod display;
pub mod error;
pub mod menu;

pub use error::ConsoleError;
use menu::{CustomerAction, MainAction};

type Result<T> = std::result::Result<T, ConsoleError>;

/// Menu loop bound to one catalog and one operator.
pub struct Console<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(catalog: &'a mut Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Serve the main menu until the operator exits or input runs dry.
    ///
    /// Only I/O failures are returned; every catalog error is printed and the
    /// menu is shown again.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("console session started");

        let outcome = loop {
            match self.main_menu() {
                Ok(true) => continue,
                Ok(false) => break Ok(()),
                Err(ConsoleError::EndOfInput) => {
                    tracing::debug!("input closed, leaving menu");
                    break Ok(());
                }
                Err(err) => break Err(err),
            }
        };

        self.output.flush()?;
        tracing::info!("console session finished");
        outcome
    }

    /// Show the main menu once and run the chosen action. `false` means exit.
    fn main_menu(&mut self) -> Result<bool> {
        menu::render_main(&mut self.output)?;
        let line = self.read_line(menu::CHOICE_PROMPT)?;

        let Some(action) = menu::parse_choice::<MainAction>(&line) else {
            writeln!(self.output, "{}", menu::INVALID_CHOICE)?;
            return Ok(true);
        };

        tracing::debug!(?action, "main menu choice");
        let outcome = match action {
            MainAction::NewVideo => self.insert_video(),
            MainAction::RentVideo => self.rent_video(),
            MainAction::ReturnVideo => self.return_video(),
            MainAction::ShowVideoDetails => self.show_video_details(),
            MainAction::DisplayAllVideos => self.display_all_videos(),
            MainAction::CheckAvailability => self.check_availability(),
            MainAction::CustomerMaintenance => self.customer_menu(),
            MainAction::Exit => return Ok(false),
        };
        self.report(outcome)?;
        Ok(true)
    }

    fn customer_menu(&mut self) -> Result<()> {
        loop {
            menu::render_customer(&mut self.output)?;
            let line = self.read_line(menu::CHOICE_PROMPT)?;

            let Some(action) = menu::parse_choice::<CustomerAction>(&line) else {
                writeln!(self.output, "{}", menu::INVALID_CHOICE)?;
                continue;
            };

            tracing::debug!(?action, "customer menu choice");
            let outcome = match action {
                CustomerAction::AddCustomer => self.add_customer(),
                CustomerAction::ShowCustomerDetails => self.show_customer_details(),
                CustomerAction::ListRentals => self.list_rentals(),
                CustomerAction::Back => return Ok(()),
            };
            self.report(outcome)?;
        }
    }

    /// Print the operator line for a recoverable failure, pass the rest up.
    fn report(&mut self, outcome: Result<()>) -> Result<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(err) => match err.operator_message() {
                Some(message) => {
                    tracing::warn!(error = %err, "operation rejected");
                    writeln!(self.output, "{message}")?;
                    Ok(())
                }
                None => Err(err),
            },
        }
    }

    fn insert_video(&mut self) -> Result<()> {
        let title = self.read_line("Enter the title of the video: ")?;
        let genre = self.read_line("Enter the genre of the video: ")?;
        let production = self.read_line("Enter the production of the video: ")?;
        let copies = self.read_line("Enter the number of copies available: ")?;
        let image_filename = self.read_line("Enter the image filename: ")?;
        let copies = parse_number("copies", &copies)?;

        self.catalog.insert_video(NewVideo {
            title,
            genre,
            production,
            copies,
            image_filename,
        })?;
        writeln!(self.output, "Video added successfully!")?;
        Ok(())
    }

    fn rent_video(&mut self) -> Result<()> {
        let (customer_id, video_id) = self.read_customer_and_video()?;

        self.catalog.rent(customer_id, video_id)?;
        writeln!(self.output, "Video rented successfully!")?;
        Ok(())
    }

    fn return_video(&mut self) -> Result<()> {
        let (customer_id, video_id) = self.read_customer_and_video()?;

        self.catalog.return_video(customer_id, video_id)?;
        writeln!(self.output, "Video returned successfully!")?;
        Ok(())
    }

    fn show_video_details(&mut self) -> Result<()> {
        let video_id = self.read_id("Enter the video ID: ", "video id")?;
        let video = self
            .catalog
            .find_video(video_id)
            .ok_or(CatalogError::VideoNotFound(video_id))?;
        display::video_details(&mut self.output, video)?;
        Ok(())
    }

    fn display_all_videos(&mut self) -> Result<()> {
        display::video_listing(&mut self.output, self.catalog.videos())?;
        Ok(())
    }

    fn check_availability(&mut self) -> Result<()> {
        let video_id = self.read_id("Enter the video ID: ", "video id")?;
        let available = self.catalog.is_available(video_id)?;
        display::availability(&mut self.output, available)?;
        Ok(())
    }

    fn add_customer(&mut self) -> Result<()> {
        let name = self.read_line("Enter the name of the customer: ")?;
        let address = self.read_line("Enter the address of the customer: ")?;

        self.catalog.add_customer(name, address)?;
        writeln!(self.output, "Customer added successfully!")?;
        Ok(())
    }

    fn show_customer_details(&mut self) -> Result<()> {
        let customer_id = self.read_id("Enter the customer ID: ", "customer id")?;
        let customer = self
            .catalog
            .find_customer(customer_id)
            .ok_or(CatalogError::CustomerNotFound(customer_id))?;
        display::customer_details(&mut self.output, customer)?;
        Ok(())
    }

    fn list_rentals(&mut self) -> Result<()> {
        let customer_id = self.read_id("Enter the customer ID: ", "customer id")?;
        let rentals = self.catalog.list_rentals(customer_id)?;
        display::rental_listing(&mut self.output, customer_id, rentals)?;
        Ok(())
    }

    /// Prompt and read one whole line, without its line terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }

        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prompt for a single record id.
    fn read_id(&mut self, prompt: &str, field: &'static str) -> Result<u32> {
        let line = self.read_line(prompt)?;
        parse_id(field, &line)
    }

    /// Both ids are read before either is parsed, so a malformed customer id
    /// never leaves the video id line for the menu.
    fn read_customer_and_video(&mut self) -> Result<(u32, u32)> {
        let customer = self.read_line("Enter the customer ID: ")?;
        let video = self.read_line("Enter the video ID: ")?;
        Ok((
            parse_id("customer id", &customer)?,
            parse_id("video id", &video)?,
        ))
    }
}

/// Parse a trimmed field as a number.
fn parse_number<T: FromStr>(field: &'static str, line: &str) -> Result<T> {
    let input = line.trim();
    input
        .parse()
        .map_err(|_| ConsoleError::invalid_number(field, input))
}

/// Parse an id field. Any integer is accepted; one outside the id range
/// cannot name a record and resolves to [`UNASSIGNED_ID`], so the lookup
/// reports it as not found.
fn parse_id(field: &'static str, line: &str) -> Result<u32> {
    let id: i64 = parse_number(field, line)?;
    Ok(u32::try_from(id).unwrap_or_else(|_| {
        tracing::debug!(field, id, "id out of range");
        UNASSIGNED_ID
    }))
}

/// Run an interactive session over the given streams.
pub fn run<R: BufRead, W: Write>(catalog: &mut Catalog, input: R, output: W) -> Result<()> {
    Console::new(catalog, input, output).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(catalog: &mut Catalog, script: &str) -> String {
        let mut out = Vec::new();
        run(catalog, Cursor::new(script.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exit_ends_the_session() {
        let mut catalog = Catalog::new();
        let out = session(&mut catalog, "8\n");

        assert!(out.starts_with("====== Main Menu ======\n"));
        assert!(out.ends_with("Enter your choice: "));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let mut catalog = Catalog::new();
        let out = session(&mut catalog, "1\nHeat\n");
        assert!(out.ends_with("Enter the genre of the video: "));
        assert_eq!(catalog.video_count(), 0);
    }

    #[test]
    fn new_video_reads_fields_in_order() {
        let mut catalog = Catalog::new();
        let out = session(
            &mut catalog,
            "1\nHeat\nCrime\nWarner Bros.\n 3 \nheat.jpg\n8\n",
        );

        assert!(out.contains("Video added successfully!"));
        let heat = catalog.find_video(1).unwrap();
        assert_eq!(heat.title, "Heat");
        assert_eq!(heat.genre, "Crime");
        assert_eq!(heat.production, "Warner Bros.");
        assert_eq!(heat.copies_available, 3);
        assert_eq!(heat.image_filename, "heat.jpg");
    }

    #[test]
    fn negative_copies_are_invalid_input() {
        let mut catalog = Catalog::new();
        let out = session(&mut catalog, "1\nHeat\nCrime\nWB\n-2\nheat.jpg\n8\n");

        assert!(out.contains("Invalid input!"));
        assert_eq!(catalog.video_count(), 0);
    }

    #[test]
    fn rent_and_return_round_trip() {
        let mut catalog = Catalog::with_demo_data();
        let out = session(&mut catalog, "2\n1\n4\n2\n1\n4\n2\n1\n4\n3\n1\n4\n8\n");

        assert_eq!(out.matches("Video rented successfully!").count(), 2);
        assert!(out.contains("Video is not available for rent!"));
        assert!(out.contains("Video returned successfully!"));
        assert_eq!(catalog.find_video(4).unwrap().copies_available, 1);
    }

    #[test]
    fn rent_reports_missing_records() {
        let mut catalog = Catalog::with_demo_data();
        let out = session(&mut catalog, "2\n1\n99\n2\n99\n1\n8\n");

        assert!(out.contains("Video not found!"));
        assert!(out.contains("Customer not found!"));
    }

    #[test]
    fn return_without_rentals_is_reported() {
        let mut catalog = Catalog::with_demo_data();
        let out = session(&mut catalog, "3\n2\n1\n8\n");
        assert!(out.contains("No rented videos found for this customer!"));
        assert_eq!(catalog.find_video(1).unwrap().copies_available, 5);
    }

    #[test]
    fn video_details_and_listing() {
        let mut catalog = Catalog::with_demo_data();
        let out = session(&mut catalog, "4\n3\n5\n8\n");

        assert!(out.contains("Video ID: 3\nTitle: Pulp Fiction\nGenre: Crime\n"));
        assert_eq!(out.matches(display::LISTING_SEPARATOR).count(), 5);
    }

    #[test]
    fn empty_store_has_no_videos() {
        let mut catalog = Catalog::new();
        let out = session(&mut catalog, "5\n8\n");
        assert!(out.contains("No videos available!"));
    }

    #[test]
    fn availability_check() {
        let mut catalog = Catalog::with_demo_data();
        let out = session(&mut catalog, "6\n5\n6\n42\n8\n");

        assert!(out.contains("Video availability: Available"));
        assert!(out.contains("Video not found!"));
    }

    #[test]
    fn invalid_choices_are_reported() {
        let mut catalog = Catalog::new();
        let out = session(&mut catalog, "0\nnine\n7\n12\n4\n8\n");
        assert_eq!(out.matches(menu::INVALID_CHOICE).count(), 3);
    }

    #[test]
    fn customer_maintenance_flow() {
        let mut catalog = Catalog::new();
        catalog
            .insert_video(NewVideo::new("Heat", "Crime", "WB", 2, "heat.jpg"))
            .unwrap();

        let script = concat!(
            "7\n",
            "1\nAnn Lee\n9 Oak Ave\n",
            "2\n1\n",
            "3\n1\n",
            "4\n",
            "2\n1\n1\n",
            "7\n",
            "3\n1\n",
            "2\n5\n",
            "4\n",
            "8\n",
        );
        let out = session(&mut catalog, script);

        assert!(out.contains("Customer added successfully!"));
        assert!(out.contains("Customer ID: 1\nName: Ann Lee\nAddress: 9 Oak Ave\n"));
        assert!(out.contains("No rented videos found for this customer!"));
        assert!(out.contains("Videos rented by customer ID 1:\nVideo ID: 1, Title: Heat\n"));
        assert!(out.contains("Customer not found!"));
        assert_eq!(catalog.customer_count(), 1);
    }

    #[test]
    fn malformed_ids_are_invalid_input() {
        let mut catalog = Catalog::with_demo_data();
        let out = session(&mut catalog, "2\nabc\n1\n6\n1.5\n8\n");
        assert_eq!(out.matches("Invalid input!").count(), 2);
        assert_eq!(catalog.find_video(1).unwrap().copies_available, 5);
    }

    #[test]
    fn out_of_range_ids_are_not_found() {
        let mut catalog = Catalog::with_demo_data();
        let script = concat!(
            "6\n-1\n",
            "4\n-3\n",
            "4\n4294967296\n",
            "2\n-7\n1\n",
            "7\n2\n-2\n4\n",
            "8\n",
        );
        let out = session(&mut catalog, script);

        assert!(!out.contains("Invalid input!"));
        assert_eq!(out.matches("Video not found!").count(), 3);
        assert_eq!(out.matches("Customer not found!").count(), 2);
    }

    #[test]
    fn malformed_customer_id_still_consumes_the_video_id() {
        let mut catalog = Catalog::with_demo_data();
        let out = session(&mut catalog, "2\nx\n8\n4\n1\n8\n");

        assert_eq!(out.matches("Invalid input!").count(), 1);
        assert!(out.contains("Title: The Shawshank Redemption"));
        assert!(catalog.rental_record(1).is_none());
    }

    #[test]
    fn malformed_copies_still_consume_the_image_filename() {
        let mut catalog = Catalog::new();
        let out = session(&mut catalog, "1\nHeat\nCrime\nWB\nmany\nheat.jpg\n5\n8\n");

        assert!(out.contains("Enter the image filename: Invalid input!"));
        assert!(out.contains("No videos available!"));
        assert_eq!(catalog.video_count(), 0);
    }
}
