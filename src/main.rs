use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use estate_market::auth::{AuthService, FileSessionStore, DEMO_CREDENTIALS};
use estate_market::config::MarketConfig;
use estate_market::dashboard::{AdminSnapshot, ClientDashboard, InquiryCounts};
use estate_market::error::AuthError;
use estate_market::forms::{
    ContactForm, ContactTopic, InquiryForm, ListingForm, NotificationPreference,
    NotificationSettings, PasswordChangeForm, ProfileForm, RegistrationForm,
    DEFAULT_INQUIRY_MESSAGE,
};
use estate_market::models::{
    Inquiry, InquiryStatus, Property, PropertyStatus, PropertyType, Role, User,
};
use estate_market::search::{self, text, SearchFilters, SortKey};
use estate_market::store::{InquiryRepository, MemoryStore, PropertyRepository};
use estate_market::submissions::Submissions;
use std::path::PathBuf;
use std::sync::Arc;
use std::str::FromStr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "estate")]
#[command(about = "Browse property listings and manage a demo marketplace session", long_about = None)]
struct Cli {
    /// Session storage file (overrides ESTATE_SESSION_FILE)
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and sort listings
    Properties(FilterArgs),
    /// Show one listing in full
    Property { id: String },
    /// List featured properties
    Featured,
    /// Sign in with a demo account
    Login { email: String, password: String },
    /// Create an account and sign in
    Register(RegisterArgs),
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Save or unsave a listing for the signed-in user
    Save { id: String },
    /// Saved listings of the signed-in user
    Saved {
        /// Matches title, city or state
        #[arg(long, default_value = "")]
        search: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Overview for the signed-in user
    Dashboard,
    /// Inquiries of the signed-in user
    Inquiries {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        status: Option<InquiryStatus>,
    },
    /// Contact the agent of a listing
    Inquire(InquireArgs),
    /// Send a message through the contact page
    Contact(ContactArgs),
    /// Submit a new listing
    AddProperty(ListingArgs),
    /// Change the password of the signed-in user
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    /// Show or update the profile and notification settings
    Settings(SettingsArgs),
    /// Admin panel
    Admin {
        #[command(subcommand)]
        view: AdminView,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// City, state or street address
    #[arg(long)]
    location: Option<String>,
    /// house, apartment, condo, townhouse or land
    #[arg(long = "type")]
    property_type: Option<String>,
    /// for-sale, for-rent, sold or rented
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    min_price: Option<u64>,
    #[arg(long)]
    max_price: Option<u64>,
    /// Minimum bedrooms
    #[arg(long)]
    bedrooms: Option<u32>,
    /// Minimum bathrooms
    #[arg(long)]
    bathrooms: Option<u32>,
    #[arg(long)]
    min_area: Option<u32>,
    #[arg(long)]
    max_area: Option<u32>,
    /// newest, price-low, price-high, area-large or area-small
    #[arg(long, default_value_t = SortKey::Newest)]
    sort: SortKey,
}

impl FilterArgs {
    fn filters(&self) -> SearchFilters {
        SearchFilters {
            location: self.location.clone(),
            property_type: parse_or_ignore(self.property_type.as_deref()),
            status: parse_or_ignore(self.status.as_deref()),
            min_price: self.min_price,
            max_price: self.max_price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            min_area: self.min_area,
            max_area: self.max_area,
        }
    }
}

// Unknown filter values place no constraint rather than aborting the search.
fn parse_or_ignore<T>(raw: Option<&str>) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = raw?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring filter: {}", e);
            None
        }
    }
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
    /// client or agent
    #[arg(long, default_value_t = Role::Client)]
    account_type: Role,
    #[arg(long)]
    agree_terms: bool,
}

#[derive(Args)]
struct InquireArgs {
    property_id: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long, default_value = DEFAULT_INQUIRY_MESSAGE)]
    message: String,
}

#[derive(Args)]
struct ContactArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    subject: String,
    #[arg(long)]
    message: String,
    /// buying, selling, renting, investment or general
    #[arg(long)]
    topic: Option<ContactTopic>,
}

#[derive(Args)]
struct ListingArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    price: Option<u64>,
    #[arg(long = "type")]
    property_type: Option<PropertyType>,
    #[arg(long)]
    status: Option<PropertyStatus>,
    #[arg(long)]
    bedrooms: Option<u32>,
    #[arg(long)]
    bathrooms: Option<u32>,
    #[arg(long)]
    area: Option<u32>,
    #[arg(long)]
    year_built: Option<u16>,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    state: String,
    #[arg(long, default_value = "")]
    zip_code: String,
    /// Repeatable
    #[arg(long = "feature")]
    features: Vec<String>,
    /// Repeatable
    #[arg(long = "image")]
    images: Vec<String>,
}

impl ListingArgs {
    fn into_form(self) -> ListingForm {
        let mut form = ListingForm {
            title: self.title,
            description: self.description,
            price: self.price,
            property_type: self.property_type,
            status: self.status,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            year_built: self.year_built,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            ..Default::default()
        };
        for feature in &self.features {
            form.toggle_feature(feature);
        }
        for image in &self.images {
            form.add_image(image);
        }
        form
    }
}

#[derive(Args)]
struct SettingsArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    bio: Option<String>,
    /// Avatar image URL
    #[arg(long)]
    avatar: Option<String>,
    /// Notification to switch on (repeatable)
    #[arg(long = "enable")]
    enable: Vec<NotificationPreference>,
    /// Notification to switch off (repeatable)
    #[arg(long = "disable")]
    disable: Vec<NotificationPreference>,
}

impl SettingsArgs {
    fn has_changes(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.bio, &self.avatar]
            .iter()
            .any(|field| field.is_some())
            || !self.enable.is_empty()
            || !self.disable.is_empty()
    }

    fn apply(self, profile: &mut ProfileForm, notifications: &mut NotificationSettings) {
        let fields = [
            (self.name, &mut profile.name),
            (self.email, &mut profile.email),
            (self.phone, &mut profile.phone),
            (self.bio, &mut profile.bio),
            (self.avatar, &mut profile.avatar),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        for preference in self.enable {
            notifications.set(preference, true);
        }
        for preference in self.disable {
            notifications.set(preference, false);
        }
    }
}

#[derive(Subcommand)]
enum AdminView {
    /// Headline numbers, featured listings and recent inquiries
    Stats,
    Properties {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        status: Option<PropertyStatus>,
    },
    Users {
        #[arg(long, default_value = "")]
        search: String,
    },
    Inquiries {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        status: Option<InquiryStatus>,
    },
}

/// Services shared by every command. The store is reseeded on each run;
/// only the session persists.
struct App {
    store: Arc<MemoryStore>,
    auth: AuthService,
    submissions: Submissions,
}

impl App {
    fn new(config: &MarketConfig) -> Self {
        let store = Arc::new(MemoryStore::seeded());
        let sessions = Arc::new(FileSessionStore::new(&config.session_file));
        let auth = AuthService::new(store.clone(), sessions, config.latency);
        let submissions = Submissions::new(store.clone(), store.clone(), config.latency);
        Self {
            store,
            auth,
            submissions,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("estate_market=info,estate=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = MarketConfig::from_env();
    if let Some(path) = cli.session_file {
        config = config.with_session_file(path);
    }
    info!("Using session storage at {}", config.session_file.display());

    let app = App::new(&config);
    run(&app, cli.command).await
}

async fn run(app: &App, command: Commands) -> Result<()> {
    match command {
        Commands::Properties(args) => {
            let properties = app.store.list_properties().await?;
            let filters = args.filters();
            let results = search::search(&properties, &filters, args.sort);
            println!(
                "{} properties found ({} filters, {})\n",
                results.len(),
                filters.active_count(),
                args.sort.label()
            );
            print_listings(&results);
        }
        Commands::Property { id } => match app.store.find_property(&id).await? {
            Some(property) => print_property_detail(&property),
            None => anyhow::bail!("Property not found: {}", id),
        },
        Commands::Featured => {
            let featured = app.store.featured_properties().await?;
            print_listings(&featured.iter().collect::<Vec<_>>());
        }
        Commands::Login { email, password } => match app.auth.login(&email, &password).await {
            Ok(user) => println!("Welcome back, {} ({})", user.name, user.role),
            Err(AuthError::InvalidCredentials) => {
                eprintln!("Demo accounts:");
                for cred in DEMO_CREDENTIALS.iter() {
                    eprintln!("  {:<22} {} ({})", cred.email, cred.password, cred.role);
                }
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Register(args) => {
            let form = RegistrationForm {
                first_name: args.first_name,
                last_name: args.last_name,
                email: args.email,
                phone: args.phone,
                password: args.password,
                confirm_password: args.confirm_password,
                account_type: Some(args.account_type),
                agree_to_terms: args.agree_terms,
            };
            let user = app.auth.register(form.validate()?).await?;
            println!("Account created for {} <{}> ({})", user.name, user.email, user.id);
        }
        Commands::Logout => {
            app.auth.logout().await?;
            println!("Signed out");
        }
        Commands::Whoami => match app.auth.current_user().await? {
            Some(user) => print_user(&user),
            None => println!("Not signed in"),
        },
        Commands::Save { id } => {
            let mut user = app.auth.require_user().await?;
            if app.store.find_property(&id).await?.is_none() {
                anyhow::bail!("Property not found: {}", id);
            }
            let saved = user.toggle_saved(&id);
            app.auth.session().establish(user).await?;
            println!("{} property {}", if saved { "Saved" } else { "Removed" }, id);
        }
        Commands::Saved { search, filters } => {
            let user = app.auth.require_user().await?;
            let properties = app.store.list_properties().await?;
            let mut results = search::search_saved(
                &properties,
                &user.saved_properties,
                &filters.filters(),
                filters.sort,
            );
            results.retain(|p| text::saved_listing_matches(p, &search));
            println!("{} saved properties\n", results.len());
            print_listings(&results);
        }
        Commands::Dashboard => {
            let user = app.auth.require_user().await?;
            let dashboard = ClientDashboard::load(app.store.as_ref(), &user).await?;
            let properties = app.store.list_properties().await?;
            println!("Welcome back, {}!\n", user.name);
            println!("Saved properties:  {}", dashboard.saved_count());
            println!("Pending inquiries: {}", dashboard.pending_inquiries);
            println!("Total inquiries:   {}\n", dashboard.total_inquiries());
            print_listings(&dashboard.saved.iter().take(3).collect::<Vec<_>>());
            for inquiry in dashboard.inquiries.iter().take(3) {
                print_inquiry(inquiry, &properties);
            }
        }
        Commands::Inquiries { search, status } => {
            let user = app.auth.require_user().await?;
            let properties = app.store.list_properties().await?;
            let inquiries = app.store.inquiries_by_user(&user.id).await?;
            let counts = InquiryCounts::tally(&inquiries);
            println!(
                "{} total, {} pending, {} responded, {} closed\n",
                counts.total, counts.pending, counts.responded, counts.closed
            );
            for inquiry in text::client_inquiries(&inquiries, &properties, &search, status) {
                print_inquiry(inquiry, &properties);
            }
        }
        Commands::Inquire(args) => {
            let sender = app.auth.current_user().await?;
            let form = InquiryForm {
                property_id: args.property_id,
                name: args.name,
                email: args.email,
                phone: args.phone,
                message: args.message,
            };
            let receipt = app.submissions.submit_inquiry(&form, sender.as_ref()).await?;
            println!("{} (ref {})", receipt.message, receipt.reference);
        }
        Commands::Contact(args) => {
            let form = ContactForm {
                name: args.name,
                email: args.email,
                phone: args.phone,
                subject: args.subject,
                message: args.message,
                inquiry_type: args.topic,
            };
            let receipt = app.submissions.submit_contact(&form).await?;
            println!("{} (ref {})", receipt.message, receipt.reference);
        }
        Commands::AddProperty(args) => {
            app.auth.require_user().await?;
            let receipt = app.submissions.submit_listing(&args.into_form()).await?;
            println!("{} (ref {})", receipt.message, receipt.reference);
        }
        Commands::Password {
            current,
            new,
            confirm,
        } => {
            app.auth.require_user().await?;
            let form = PasswordChangeForm {
                current_password: current,
                new_password: new,
                confirm_password: confirm,
            };
            let receipt = app.submissions.update_password(&form).await?;
            println!("{}", receipt.message);
        }
        Commands::Settings(args) => {
            let user = app.auth.require_user().await?;
            let mut profile = ProfileForm::from_user(&user);
            let mut notifications = NotificationSettings::default();
            if args.has_changes() {
                args.apply(&mut profile, &mut notifications);
                let receipt = app.submissions.update_profile(&profile, &notifications).await?;
                println!("{}\n", receipt.message);
            }
            print_settings(&profile, &notifications);
        }
        Commands::Admin { view } => {
            app.auth.require_admin().await?;
            run_admin(app, view).await?;
        }
    }

    Ok(())
}

async fn run_admin(app: &App, view: AdminView) -> Result<()> {
    let snapshot = AdminSnapshot::load(app.store.as_ref()).await?;

    match view {
        AdminView::Stats => {
            let stats = snapshot.stats();
            println!("Total properties:  {}", stats.total_properties);
            println!("Active listings:   {}", stats.active_listings);
            println!("Sold / rented:     {}", stats.sold_or_rented);
            println!("Clients:           {}", stats.total_clients);
            println!("Inquiries:         {} ({} pending)", stats.total_inquiries, stats.pending_inquiries);
            println!("Revenue:           ${}\n", stats.total_revenue);

            println!("Featured:");
            print_listings(&snapshot.featured_preview());
            println!("Recent inquiries:");
            for inquiry in snapshot.recent_inquiries(5) {
                print_inquiry(inquiry, &snapshot.properties);
            }
        }
        AdminView::Properties { search, status } => {
            print_listings(&text::admin_listings(&snapshot.properties, &search, status));
        }
        AdminView::Users { search } => {
            for user in text::admin_users(&snapshot.users, &search) {
                print_user(user);
            }
        }
        AdminView::Inquiries { search, status } => {
            let hits = text::admin_inquiries(
                &snapshot.inquiries,
                &snapshot.properties,
                &snapshot.users,
                &search,
                status,
            );
            for inquiry in hits {
                print_inquiry(inquiry, &snapshot.properties);
            }
        }
    }

    Ok(())
}

fn print_listings(properties: &[&Property]) {
    for (i, property) in properties.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, property.display_price());
        println!(
            "   {} · {} · {} bd, {} ba, {} sqft",
            property.property_type,
            property.status.label(),
            property.bedrooms,
            property.bathrooms,
            property.area
        );
        println!(
            "   {}, {}, {}",
            property.location.address, property.location.city, property.location.state
        );
        println!("   ID: {}", property.id);
        println!();
    }
}

fn print_property_detail(property: &Property) {
    print_listings(&[property]);
    println!("{}\n", property.description);
    println!("Built:    {}", property.year_built);
    println!("Zip:      {}", property.location.zip_code);
    println!("Features: {}", property.features.join(", "));
    println!("Images:   {}", property.images.len());
    println!(
        "Agent:    {} <{}> {}",
        property.agent.name, property.agent.email, property.agent.phone
    );
}

fn print_user(user: &User) {
    println!("{} <{}>", user.name, user.email);
    println!("   Role: {}", user.role);
    if let Some(phone) = &user.phone {
        println!("   Phone: {}", phone);
    }
    println!(
        "   {} saved, {} inquiries, member since {}",
        user.saved_properties.len(),
        user.inquiries.len(),
        user.created_at.format("%Y-%m-%d")
    );
    println!("   ID: {}", user.id);
    println!();
}

fn print_settings(profile: &ProfileForm, notifications: &NotificationSettings) {
    println!("Name:   {}", profile.name);
    println!("Email:  {}", profile.email);
    println!("Phone:  {}", profile.phone);
    println!("Bio:    {}", profile.bio);
    println!("Avatar: {}\n", profile.avatar);
    for preference in NotificationPreference::ALL {
        let state = if notifications.get(*preference) { "on" } else { "off" };
        println!("{:<20} {}", preference.label(), state);
    }
}

fn print_inquiry(inquiry: &Inquiry, properties: &[Property]) {
    let title = properties
        .iter()
        .find(|p| p.id == inquiry.property_id)
        .map(|p| p.title.as_str())
        .unwrap_or("Unknown property");
    println!("[{}] {} ({})", inquiry.status, title, inquiry.created_at.format("%b %d, %Y"));
    println!("   {}", inquiry.message);
    if let Some(response) = &inquiry.response {
        println!("   Response: {}", response);
    }
    println!();
}
