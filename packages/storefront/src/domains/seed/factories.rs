//! Synthetic listing factories for the dev seeder.
//!
//! Makes and models rotate deterministically by index; years, mileages and
//! prices are drawn from per-category ranges.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use rand::Rng;

use crate::domains::listings::models::{Body, Category, Fuel, Transmission};

// ----------------------------- sample datasets ----------------------------

const CARS: &[(&str, &str, Body)] = &[
    ("Ford", "Fiesta", Body::Hatchback),
    ("Volkswagen", "Golf", Body::Hatchback),
    ("BMW", "3 Series", Body::Saloon),
    ("Audi", "A3", Body::Hatchback),
    ("Mercedes-Benz", "C-Class", Body::Saloon),
    ("Nissan", "Qashqai", Body::Suv),
    ("Toyota", "Yaris", Body::Hatchback),
    ("Kia", "Sportage", Body::Suv),
];

const VANS: &[(&str, &str)] = &[
    ("Ford", "Transit Custom"),
    ("Mercedes-Benz", "Sprinter"),
    ("Volkswagen", "Transporter T6"),
    ("Vauxhall", "Vivaro"),
];

const BIKES: &[(&str, &str)] = &[
    ("Yamaha", "R1"),
    ("Honda", "CBR600RR"),
    ("Kawasaki", "Ninja 650"),
    ("Ducati", "Monster 821"),
    ("BMW", "R1250GS"),
];

const CARAVANS: &[(&str, &str)] = &[
    ("Swift", "Challenger 580"),
    ("Bailey", "Unicorn Cadiz"),
    ("Elddis", "Avante 550"),
];

const TRUCKS: &[(&str, &str)] = &[("Scania", "R450"), ("Volvo", "FH16"), ("DAF", "XF 530")];

const FARM_PLANT: &[(&str, &str, &str)] = &[
    ("John Deere", "6155R", "tractor"),
    ("Massey Ferguson", "7718S", "tractor"),
    ("JCB", "3CX", "digger"),
    ("Caterpillar", "320", "excavator"),
];

const FUELS: &[Fuel] = &[Fuel::Petrol, Fuel::Diesel, Fuel::Hybrid, Fuel::Electric];
const GEARS: &[Transmission] = &[Transmission::Manual, Transmission::Automatic];
const COLOURS: &[&str] = &["Black", "White", "Grey", "Blue", "Red", "Silver"];

/// Display towns rotated across seeded listings.
pub const TOWNS: &[&str] = &[
    "London",
    "Manchester",
    "Leeds",
    "Birmingham",
    "Glasgow",
    "Bristol",
];

/// Already-normalised postcodes paired with TOWNS.
pub const POSTCODES: &[&str] = &["SW1A1AA", "M11AE", "LS12AB", "B11AA", "G21AA", "BS11AA"];

/// One synthetic vehicle before ownership and location are attached.
#[derive(Debug, Clone)]
pub struct SeedVehicle {
    pub category: Category,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub fuel: Option<Fuel>,
    pub transmission: Option<Transmission>,
    pub body: Option<Body>,
    pub colour: String,
    pub price: f64,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Build the `index`-th synthetic vehicle of a category.
pub fn build(category: &Category, index: usize) -> SeedVehicle {
    match category {
        Category::Cars => make_car(index),
        Category::Vans => make_van(index),
        Category::Bikes => make_bike(index),
        Category::Caravans => make_caravan(index),
        Category::Trucks => make_truck(index),
        Category::FarmPlant => make_farm_plant(index),
    }
}

// ------------------------------- factories --------------------------------

fn make_car(i: usize) -> SeedVehicle {
    let (make, model, body) = pick(CARS, i);
    let year = rand_int(2008, 2023);
    let mileage = rand_int(20_000, 120_000);
    let price = rand_int(1_500, 18_000) as f64;
    let fuel = pick(FUELS, i);
    let gearbox = pick(GEARS, i);
    let colour = pick(COLOURS, i);
    let title = format!("{} {} {} {}", year, make, model, body);

    SeedVehicle {
        category: Category::Cars,
        make: make.to_string(),
        model: model.to_string(),
        year,
        mileage,
        fuel: Some(fuel.clone()),
        transmission: Some(gearbox.clone()),
        body: Some(body),
        colour: colour.to_string(),
        price,
        description: format!(
            "{} in {}. {} miles, {}, {}.",
            title,
            colour,
            thousands(mileage),
            fuel,
            gearbox
        ),
        images: images_for("Cars", make, model, year, i),
        title,
    }
}

fn make_van(i: usize) -> SeedVehicle {
    let (make, model) = pick(VANS, i);
    let year = rand_int(2010, 2023);
    let mileage = rand_int(50_000, 200_000);
    let price = rand_int(2_500, 25_000) as f64;
    let gearbox = pick(GEARS, i);
    let colour = pick(COLOURS, i);
    let title = format!("{} {} {}", year, make, model);

    SeedVehicle {
        category: Category::Vans,
        make: make.to_string(),
        model: model.to_string(),
        year,
        mileage,
        fuel: Some(Fuel::Diesel),
        transmission: Some(gearbox),
        body: Some(Body::Van),
        colour: colour.to_string(),
        price,
        description: format!(
            "{} in {}. {} miles, ready for work.",
            title,
            colour,
            thousands(mileage)
        ),
        images: images_for("Vans", make, model, year, i),
        title,
    }
}

fn make_bike(i: usize) -> SeedVehicle {
    let (make, model) = pick(BIKES, i);
    let year = rand_int(2012, 2023);
    let mileage = rand_int(1_000, 30_000);
    let price = rand_int(1_200, 9_000) as f64;
    let colour = pick(COLOURS, i);
    let title = format!("{} {} {}", year, make, model);

    SeedVehicle {
        category: Category::Bikes,
        make: make.to_string(),
        model: model.to_string(),
        year,
        mileage,
        fuel: Some(Fuel::Petrol),
        transmission: Some(Transmission::Manual),
        body: None,
        colour: colour.to_string(),
        price,
        description: format!("{} in {}. {} miles.", title, colour, thousands(mileage)),
        images: images_for("Bikes", make, model, year, i),
        title,
    }
}

fn make_caravan(i: usize) -> SeedVehicle {
    let (make, model) = pick(CARAVANS, i);
    let year = rand_int(2008, 2023);
    let price = rand_int(2_500, 20_000) as f64;
    let colour = pick(COLOURS, i);
    let title = format!("{} {} {}", year, make, model);

    SeedVehicle {
        category: Category::Caravans,
        make: make.to_string(),
        model: model.to_string(),
        year,
        mileage: 0,
        fuel: None,
        transmission: None,
        body: None,
        colour: colour.to_string(),
        price,
        description: format!("{} {} finish, spacious and well maintained.", title, colour),
        images: images_for("Caravans", make, model, year, i),
        title,
    }
}

fn make_truck(i: usize) -> SeedVehicle {
    let (make, model) = pick(TRUCKS, i);
    let year = rand_int(2012, 2023);
    let mileage = rand_int(200_000, 800_000);
    let price = rand_int(12_000, 60_000) as f64;
    let colour = pick(COLOURS, i);
    let title = format!("{} {} {}", year, make, model);

    SeedVehicle {
        category: Category::Trucks,
        make: make.to_string(),
        model: model.to_string(),
        year,
        mileage,
        fuel: Some(Fuel::Diesel),
        transmission: Some(Transmission::Automatic),
        body: None,
        colour: colour.to_string(),
        price,
        description: format!("{} {} km, fleet maintained.", title, thousands(mileage)),
        images: images_for("Trucks", make, model, year, i),
        title,
    }
}

fn make_farm_plant(i: usize) -> SeedVehicle {
    let (make, model, kind) = pick(FARM_PLANT, i);
    let year = rand_int(2005, 2023);
    let hours = rand_int(500, 5_000);
    let price = rand_int(4_000, 55_000) as f64;
    let colour = pick(COLOURS, i);
    let title = format!("{} {} {}", year, make, model);

    SeedVehicle {
        category: Category::FarmPlant,
        make: make.to_string(),
        model: model.to_string(),
        year,
        mileage: hours,
        fuel: Some(Fuel::Diesel),
        transmission: Some(Transmission::Manual),
        body: None,
        colour: colour.to_string(),
        price,
        description: format!(
            "{}, {} hours, {} ready for work.",
            title,
            thousands(hours),
            kind
        ),
        images: images_for("Farm & Plant", make, model, year, i),
        title,
    }
}

// ------------------------------ small helpers -----------------------------

fn pick<T: Clone>(arr: &[T], i: usize) -> T {
    arr[i % arr.len()].clone()
}

fn rand_int(min: i32, max: i32) -> i32 {
    rand::thread_rng().gen_range(min..=max)
}

/// Three placeholder photos per listing.
fn images_for(category: &str, make: &str, model: &str, year: i32, index: usize) -> Vec<String> {
    (1..=3)
        .map(|n| {
            photo_url(&format!(
                "{}-{}-{}-{}-{}-{}",
                category, make, model, year, index, n
            ))
        })
        .collect()
}

fn photo_url(seed: &str) -> String {
    format!(
        "https://picsum.photos/seed/{}/900/900",
        utf8_percent_encode(seed, NON_ALPHANUMERIC)
    )
}

fn thousands(n: i32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makes_rotate_deterministically() {
        let first = build(&Category::Cars, 0);
        let again = build(&Category::Cars, 0);
        assert_eq!(first.make, again.make);
        assert_eq!(first.model, again.model);

        let ninth = build(&Category::Cars, 8);
        assert_eq!(ninth.make, first.make);
    }

    #[test]
    fn test_ranges_hold_for_every_category() {
        for category in Category::ALL {
            let vehicle = build(&category, 3);
            assert_eq!(vehicle.category, category);
            assert!(vehicle.price > 0.0);
            assert!((1900..=2023).contains(&vehicle.year));
            assert_eq!(vehicle.images.len(), 3);
            assert!(vehicle.title.starts_with(&vehicle.year.to_string()));
        }
    }

    #[test]
    fn test_caravans_have_no_drivetrain() {
        let caravan = build(&Category::Caravans, 0);
        assert_eq!(caravan.fuel, None);
        assert_eq!(caravan.transmission, None);
        assert_eq!(caravan.mileage, 0);
    }

    #[test]
    fn test_photo_seeds_are_url_safe() {
        let vehicle = build(&Category::FarmPlant, 0);
        assert!(vehicle.images[0].contains("picsum.photos/seed/"));
        assert!(!vehicle.images[0].contains(' '));
        assert!(!vehicle.images[0].contains('&'));
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(54_000), "54,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }
}
