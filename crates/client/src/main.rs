//! hbnb-client CLI entry point.

use clap::Parser;
use hbnb_client::cli::amenities::AmenitiesAction;
use hbnb_client::cli::places::PlacesAction;
use hbnb_client::cli::reviews::ReviewsAction;
use hbnb_client::cli::users::UsersAction;
use hbnb_client::cli::{Cli, Commands, OutputFormat};
use hbnb_client::client::HbnbClient;
use hbnb_client::output::{pretty, render};
use hbnb_core::listing::{
    CreateAmenityRequest, CreatePlaceRequest, CreateReviewRequest, CreateUserRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = match &cli.token {
        Some(token) => HbnbClient::new(&cli.base_url).with_token(token.as_str()),
        None => HbnbClient::new(&cli.base_url),
    };
    let format = cli.format;

    match cli.command {
        Commands::Login { email, password } => {
            let token = client.login(&email, &password).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&token)?),
                OutputFormat::Pretty if cli.quiet => println!("{}", token.access_token),
                OutputFormat::Pretty => {
                    println!("Logged in as {}. Reuse the token with:", email);
                    println!("export HBNB_TOKEN={}", token.access_token);
                }
            }
        }
        Commands::Users(users_cmd) => match users_cmd.action {
            UsersAction::List => {
                let users = client.list_users().await?;
                println!("{}", render(users.as_slice(), format, pretty::format_users));
            }
            UsersAction::Create {
                email,
                first_name,
                last_name,
                password,
                admin,
            } => {
                let request = CreateUserRequest::new(email, first_name, last_name, password)
                    .with_admin(admin);
                let user = client.create_user(&request).await?;
                println!("{}", render(&user, format, pretty::format_user));
            }
            UsersAction::Get { id } => {
                let user = client.get_user(id).await?;
                println!("{}", render(&user, format, pretty::format_user));
            }
        },
        Commands::Places(places_cmd) => match places_cmd.action {
            PlacesAction::List => {
                let places = client.list_places().await?;
                println!("{}", render(places.as_slice(), format, pretty::format_places));
            }
            PlacesAction::Create {
                title,
                price,
                latitude,
                longitude,
                description,
                amenities,
            } => {
                let mut request =
                    CreatePlaceRequest::new(title, price, latitude, longitude).with_amenities(amenities);
                if let Some(description) = description {
                    request = request.with_description(description);
                }
                let place = client.create_place(&request).await?;
                println!("{}", render(&place, format, pretty::format_place));
            }
            PlacesAction::Get { id } => {
                let place = client.get_place(id).await?;
                println!("{}", render(&place, format, pretty::format_place));
            }
        },
        Commands::Reviews(reviews_cmd) => match reviews_cmd.action {
            ReviewsAction::List => {
                let reviews = client.list_reviews().await?;
                println!("{}", render(reviews.as_slice(), format, pretty::format_reviews));
            }
            ReviewsAction::ForPlace { place_id } => {
                let reviews = client.list_place_reviews(place_id).await?;
                println!("{}", render(reviews.as_slice(), format, pretty::format_reviews));
            }
            ReviewsAction::Create {
                place_id,
                text,
                rating,
            } => {
                let request = CreateReviewRequest::new(place_id, text, rating);
                let review = client.create_review(&request).await?;
                println!("{}", render(&review, format, pretty::format_review));
            }
            ReviewsAction::Delete { id } => {
                let response = client.delete_review(id).await?;
                if !cli.quiet {
                    println!("{}", response.message);
                }
            }
        },
        Commands::Amenities(amenities_cmd) => match amenities_cmd.action {
            AmenitiesAction::List => {
                let amenities = client.list_amenities().await?;
                println!(
                    "{}",
                    render(amenities.as_slice(), format, pretty::format_amenities)
                );
            }
            AmenitiesAction::Create { name, description } => {
                let mut request = CreateAmenityRequest::new(name);
                if let Some(description) = description {
                    request = request.with_description(description);
                }
                let amenity = client.create_amenity(&request).await?;
                println!("{}", render(&amenity, format, pretty::format_amenity));
            }
        },
    }

    Ok(())
}
