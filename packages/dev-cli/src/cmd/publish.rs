//! Scripted wizard run: fill every step, publish, then show the detail
//! page the way the listing route renders it.

use anyhow::Result;
use bytes::Bytes;
use colored::Colorize;
use storefront_core::domains::listings::{fetch_detail, ListingDetail};
use storefront_core::domains::submission::{publish, PhotoFile, SubmissionWizard};

use super::{dev_gateway, gbp};

pub async fn run() -> Result<()> {
    let (gateway, deps, _subject) = dev_gateway();

    let mut wizard = SubmissionWizard::new();

    // Step 1 - Vehicle
    wizard.vehicle.make = "Ford".to_string();
    wizard.vehicle.model = "Fiesta".to_string();
    wizard.vehicle.year = "2017".to_string();
    wizard.vehicle.mileage = "54000".to_string();
    wizard.vehicle.colour = "Red".to_string();
    wizard.vehicle.description = "One owner, full service history.".to_string();
    wizard.vehicle.price = "8995".to_string();
    wizard.next()?;

    // Step 2 - Photos (drag the rear shot up, then make it the cover)
    wizard.add_photos(vec![
        PhotoFile::new("front.jpg", Bytes::from_static(&[0x10; 4096])),
        PhotoFile::new("interior.jpg", Bytes::from_static(&[0x20; 4096])),
        PhotoFile::new("rear.jpg", Bytes::from_static(&[0x30; 4096])),
    ]);
    wizard.move_photo(2, 1);
    wizard.set_cover(1);
    wizard.next()?;

    // Step 3 - Contact
    wizard.contact.name = "Dev Seller".to_string();
    wizard.contact.phone = "+447700900000".to_string();
    wizard.contact.postcode = "sw1a 1aa".to_string();
    wizard.next()?;

    // Step 4 - Review & Publish
    let receipt = publish(&deps, &mut wizard).await?;

    println!("{}", "Listing published".bright_green().bold());
    println!(
        "Uploaded {} photo(s); postcode stored privately as {}",
        gateway.blobs.uploads().len(),
        receipt.private.postcode
    );

    match fetch_detail(&deps, receipt.listing.id).await? {
        ListingDetail::Found(listing) => {
            println!();
            println!("{}", listing.title.bold());
            println!(
                "{}   {}",
                gbp(listing.price),
                listing
                    .post_town
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
            );
            println!("Category      {}", listing.category);
            if let Some(year) = listing.year {
                println!("Year          {}", year);
            }
            println!("Make          {}", listing.make);
            println!("Model         {}", listing.model);
            if let Some(mileage) = listing.mileage {
                println!("{:<13} {}", listing.mileage_label(), mileage);
            }
            if let Some(colour) = &listing.colour {
                println!("Colour        {}", colour);
            }
            println!("Cover photo   {}", listing.cover_image().unwrap_or("-"));
            if let Some(description) = &listing.description {
                println!();
                println!("{}", description);
            }
        }
        ListingDetail::NotFound => println!("Listing not found."),
    }
    Ok(())
}
