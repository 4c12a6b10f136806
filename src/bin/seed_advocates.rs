//! Seeds the fixed advocate roster into an empty database.
//!
//! Safe to re-run: if the table already holds records the seeder leaves the
//! database untouched.

use config::Config;
use dotenvy::dotenv;

use advocate_directory::db::establish_connection_pool;
use advocate_directory::domain::advocate::NewAdvocate;
use advocate_directory::models::config::ServerConfig;
use advocate_directory::repository::{AdvocateReader, AdvocateWriter, DieselRepository};

fn advocate(
    first_name: &str,
    last_name: &str,
    city: &str,
    degree: &str,
    specialties: &[&str],
    years_of_experience: i32,
    phone_number: &str,
) -> NewAdvocate {
    NewAdvocate {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        city: city.to_string(),
        degree: degree.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        years_of_experience,
        phone_number: phone_number.to_string(),
    }
}

fn roster() -> Vec<NewAdvocate> {
    vec![
        advocate(
            "John",
            "Doe",
            "New York",
            "MD",
            &["Bipolar", "LGBTQ", "Medication/Prescribing"],
            10,
            "5551234567",
        ),
        advocate(
            "Jane",
            "Smith",
            "Los Angeles",
            "PhD",
            &["Suicide History/Attempts", "General Mental Health"],
            8,
            "5559876543",
        ),
        advocate(
            "Alice",
            "Johnson",
            "Chicago",
            "MSW",
            &["Trauma & PTSD", "Personality Disorders"],
            5,
            "5554567890",
        ),
        advocate(
            "Michael",
            "Brown",
            "Houston",
            "MD",
            &["Substance Use/Abuse", "Pediatrics"],
            12,
            "5556543210",
        ),
        advocate(
            "Emily",
            "Davis",
            "Phoenix",
            "PhD",
            &["Chronic Pain", "Weight Loss & Nutrition"],
            7,
            "5553210987",
        ),
        advocate(
            "Chris",
            "Martinez",
            "Philadelphia",
            "MSW",
            &["Eating Disorders", "Diabetic Diet and Nutrition"],
            9,
            "5557890123",
        ),
        advocate(
            "Jessica",
            "Taylor",
            "San Antonio",
            "MD",
            &["Life Coaching", "Obsessive-Compulsive Disorders"],
            11,
            "5554561234",
        ),
        advocate(
            "David",
            "Harris",
            "San Diego",
            "PhD",
            &["Neuropsychological Evaluations & Testing (ADHD testing)"],
            3,
            "5557896543",
        ),
        advocate(
            "Laura",
            "Clark",
            "Dallas",
            "MSW",
            &["Attention and Hyperactivity (ADHD)", "Personal Growth"],
            6,
            "5550123456",
        ),
        advocate(
            "Daniel",
            "Lewis",
            "San Jose",
            "MD",
            &["Sleep Issues", "Schizophrenia and Psychotic Disorders"],
            17,
            "5553217654",
        ),
        advocate(
            "Sarah",
            "Lee",
            "Austin",
            "PhD",
            &["Learning Disorders", "Domestic Abuse"],
            2,
            "5551238765",
        ),
        advocate(
            "James",
            "King",
            "Jacksonville",
            "MSW",
            &["Men's Issues", "Relationship Issues (family, friends, couple, etc)"],
            14,
            "5556540987",
        ),
    ]
}

fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let server_config: ServerConfig = config
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Failed to parse configuration: {e}")))?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let existing = repo
        .list_advocates()
        .map_err(|e| std::io::Error::other(format!("Failed to read roster: {e}")))?;

    if !existing.is_empty() {
        log::info!("Roster already seeded ({} advocates), nothing to do", existing.len());
        return Ok(());
    }

    let inserted = repo
        .create_advocates(&roster())
        .map_err(|e| std::io::Error::other(format!("Failed to seed roster: {e}")))?;

    log::info!("Seeded {inserted} advocates");
    Ok(())
}
