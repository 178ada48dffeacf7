//! Plain-text rendering of catalog records.

use std::io::{self, Write};

use rental_app::catalog::{Customer, CustomerId, Video};

pub const LISTING_SEPARATOR: &str = "=========================";

pub fn video_details<W: Write>(out: &mut W, video: &Video) -> io::Result<()> {
    writeln!(out, "Video ID: {}", video.id)?;
    writeln!(out, "Title: {}", video.title)?;
    writeln!(out, "Genre: {}", video.genre)?;
    writeln!(out, "Production: {}", video.production)?;
    writeln!(out, "Number of copies: {}", video.copies_available)?;
    writeln!(out, "Image filename: {}", video.image_filename)
}

pub fn video_listing<'a, W: Write>(
    out: &mut W,
    videos: impl Iterator<Item = &'a Video>,
) -> io::Result<()> {
    let mut videos = videos.peekable();
    if videos.peek().is_none() {
        return writeln!(out, "No videos available!");
    }

    for video in videos {
        video_details(out, video)?;
        writeln!(out, "{LISTING_SEPARATOR}")?;
    }
    Ok(())
}

pub fn customer_details<W: Write>(out: &mut W, customer: &Customer) -> io::Result<()> {
    writeln!(out, "Customer ID: {}", customer.id)?;
    writeln!(out, "Name: {}", customer.name)?;
    writeln!(out, "Address: {}", customer.address)
}

pub fn rental_listing<'a, W: Write>(
    out: &mut W,
    customer_id: CustomerId,
    rentals: impl Iterator<Item = &'a Video>,
) -> io::Result<()> {
    writeln!(out, "Videos rented by customer ID {customer_id}:")?;
    for video in rentals {
        writeln!(out, "Video ID: {}, Title: {}", video.id, video.title)?;
    }
    Ok(())
}

pub fn availability<W: Write>(out: &mut W, available: bool) -> io::Result<()> {
    let status = if available { "Available" } else { "Not Available" };
    writeln!(out, "Video availability: {status}")
}
