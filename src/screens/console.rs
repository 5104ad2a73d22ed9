//! Console front end - a line-oriented rendition of the office screens.
//!
//! Commands:
//!
//! ```text
//! list    <entity>              search <entity> <term>   show   <entity> <id>
//! add     <entity>              update <entity> <id>     delete <entity> <id>
//! filter  <status>              help                     quit
//! ```
//!
//! `<entity>` is one of `property`, `agent`, `inquiry`, `marketing` (plurals accepted).
//! `add` and `update` prompt field by field; on update a blank answer keeps the
//! current value and `-` clears it. Every error is reported and the loop goes on.

use crate::{
    core::{
        INQUIRY_STATUSES, LISTING_STATUSES, PROPERTY_TYPES, STATUS_ALL,
        agent::{self, AgentDeletion},
        auth, inquiry, marketing, property,
    },
    entities::user,
    errors::{Error, Result},
    format::{
        INQUIRY_AGENT_PLACEHOLDER, INQUIRY_PROPERTY_PLACEHOLDER, MARKETING_AGENT_PLACEHOLDER,
        PROPERTY_AGENT_PLACEHOLDER, display_text, format_bathrooms, format_bedrooms, format_date,
        format_percentage, format_price, or_placeholder,
    },
    screens::{
        AppContext,
        forms::{AgentForm, InquiryForm, MarketingForm, PropertyForm, RegistrationForm},
        rows::{
            AgentRow, INQUIRY_STATUS_PLACEHOLDER, InquiryRow, MarketingRow, PropertyRow, TableRow,
            rows,
        },
        selector::{self, Choice},
    },
};
use sea_orm::DatabaseConnection;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Answer that clears a field during `update`.
const CLEAR: &str = "-";

const HELP: &str = "\
Commands:
  list <entity>            show every record
  search <entity> <term>   property: address/type, agent: name/email/license,
                           inquiry: client name, marketing: address/type
  show <entity> <id>       show one record in full
  add <entity>             create a record (prompts for each field)
  update <entity> <id>     edit a record (blank keeps, '-' clears)
  delete <entity> <id>     remove a record
  filter <status>          inquiries with the given status ('All' for every one)
  help                     this text
  quit                     leave
Entities: property, agent, inquiry, marketing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entity {
    Property,
    Agent,
    Inquiry,
    Marketing,
}

impl Entity {
    fn parse(word: &str) -> Result<Self> {
        match word.to_ascii_lowercase().as_str() {
            "property" | "properties" => Ok(Self::Property),
            "agent" | "agents" => Ok(Self::Agent),
            "inquiry" | "inquiries" => Ok(Self::Inquiry),
            "marketing" => Ok(Self::Marketing),
            _ => Err(Error::validation(
                "entity",
                format!("unknown record type '{word}'"),
            )),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Property => "Property",
            Self::Agent => "Agent",
            Self::Inquiry => "Inquiry",
            Self::Marketing => "Marketing entry",
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

fn entity_arg(args: &[&str]) -> Result<Entity> {
    let word = args
        .first()
        .ok_or_else(|| Error::validation("entity", "missing record type"))?;
    Entity::parse(word)
}

fn id_arg(args: &[&str]) -> Result<i64> {
    let word = args
        .get(1)
        .ok_or_else(|| Error::validation("id", "missing record id"))?;
    word.parse()
        .map_err(|_| Error::validation("id", format!("'{word}' is not a record id")))
}

/// Everything after `search <entity>`, inner spacing kept.
fn search_term(line: &str) -> &str {
    let rest = line.trim_start();
    let rest = rest.split_once(char::is_whitespace).map_or("", |(_, r)| r);
    let rest = rest.trim_start();
    rest.split_once(char::is_whitespace)
        .map_or("", |(_, term)| term.trim())
}

fn plural(count: u64, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

fn current<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Interactive session over any line source and sink.
///
/// The console borrows the shared [`AppContext`]; closing the connection stays with
/// whoever opened it.
pub struct Console<'a, R, W> {
    ctx: &'a AppContext,
    input: R,
    output: W,
    user: Option<user::Model>,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    /// Creates a console reading commands from `input` and printing to `output`.
    pub const fn new(ctx: &'a AppContext, input: R, output: W) -> Self {
        Self {
            ctx,
            input,
            output,
            user: None,
        }
    }

    /// The account that passed the login gate, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&user::Model> {
        self.user.as_ref()
    }

    const fn db(&self) -> &'a DatabaseConnection {
        &self.ctx.database
    }

    /// Consumes the console and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the session until `quit` or end of input.
    ///
    /// With `require_login` the login gate comes first; leaving the gate without
    /// logging in ends the session before any record is shown.
    ///
    /// # Errors
    /// Only I/O failures on the console streams end the session with an error.
    pub async fn run(&mut self, require_login: bool) -> Result<()> {
        if require_login && !self.authenticate().await? {
            writeln!(self.output, "Goodbye.")?;
            return Ok(());
        }

        writeln!(self.output, "Real-estate records. Type 'help' for commands.")?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match self.dispatch(&line).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                Err(e) => {
                    warn!("Command '{}' failed: {}", line.trim(), e);
                    writeln!(self.output, "Error: {e}")?;
                }
            }
        }

        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts for one value; end of input reads as an empty answer.
    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Prompts with a current value: blank keeps it, `-` clears it.
    fn ask_or_keep(&mut self, label: &str, value: &str) -> Result<String> {
        let answer = if value.is_empty() {
            self.ask(label)?
        } else {
            self.ask(&format!("{label} [{value}]"))?
        };
        Ok(match answer.trim() {
            "" => value.to_string(),
            CLEAR => String::new(),
            _ => answer,
        })
    }

    fn ask_choice(
        &mut self,
        label: &str,
        choices: &[Choice],
        value: Option<i64>,
    ) -> Result<Option<i64>> {
        for choice in choices {
            writeln!(self.output, "  {choice}")?;
        }
        let value_text = current(value);
        let answer = if value_text.is_empty() {
            self.ask(&format!("{label} id (blank for none)"))?
        } else {
            self.ask(&format!("{label} id [{value_text}]"))?
        };
        match answer.trim() {
            "" => Ok(value),
            CLEAR => Ok(None),
            text => Choice::parse_id(text),
        }
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{question} (y/n)"))?;
        Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn print_table<T: TableRow>(&mut self, table: Vec<T>) -> Result<()> {
        if table.is_empty() {
            writeln!(self.output, "No records found.")?;
            return Ok(());
        }

        let cells: Vec<Vec<String>> = table.into_iter().map(TableRow::into_cells).collect();
        let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let headers: Vec<String> = T::HEADERS.iter().map(|h| (*h).to_string()).collect();
        for row in std::iter::once(&headers).chain(&cells) {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect();
            writeln!(self.output, "{}", line.join(" | ").trim_end())?;
        }
        Ok(())
    }

    async fn authenticate(&mut self) -> Result<bool> {
        let db = self.db();
        writeln!(
            self.output,
            "Please log in. Commands: login, register, quit"
        )?;

        loop {
            write!(self.output, "auth> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            match line.trim().to_ascii_lowercase().as_str() {
                "login" => {
                    let mobile = self.ask("Mobile Number")?;
                    let password = self.ask("Password")?;
                    match auth::login(db, &mobile, &password).await {
                        Ok(Some(account)) => {
                            writeln!(self.output, "Welcome, {}!", account.name)?;
                            self.user = Some(account);
                            return Ok(true);
                        }
                        Ok(None) => writeln!(self.output, "Invalid mobile number or password")?,
                        Err(Error::Io(e)) => return Err(Error::Io(e)),
                        Err(e) => {
                            warn!("Login failed: {}", e);
                            writeln!(self.output, "Error: {e}")?;
                        }
                    }
                }
                "register" => {
                    let form = RegistrationForm {
                        name: self.ask("Name")?,
                        address: self.ask("Address")?,
                        mobile: self.ask("Mobile Number")?,
                        password: self.ask("Password")?,
                        confirm_password: self.ask("Confirm Password")?,
                    };
                    let outcome = match form.validate() {
                        Ok(registration) => auth::register_user(db, registration).await,
                        Err(e) => Err(e),
                    };
                    match outcome {
                        Ok(account) => writeln!(
                            self.output,
                            "Registered {}. You can now log in.",
                            account.mobile
                        )?,
                        Err(Error::Io(e)) => return Err(Error::Io(e)),
                        Err(e) => writeln!(self.output, "Error: {e}")?,
                    }
                }
                "quit" | "exit" => return Ok(false),
                "" => {}
                other => writeln!(self.output, "Unknown command '{other}'")?,
            }
        }
    }

    async fn dispatch(&mut self, line: &str) -> Result<Flow> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((command, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };
        debug!("Console command: {}", command);

        match command.to_ascii_lowercase().as_str() {
            "help" => writeln!(self.output, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            "list" => self.search(entity_arg(args)?, "").await?,
            "search" => {
                let entity = entity_arg(args)?;
                self.search(entity, search_term(line)).await?;
            }
            "show" => self.show(entity_arg(args)?, id_arg(args)?).await?,
            "add" => self.save(entity_arg(args)?, None).await?,
            "update" => self.save(entity_arg(args)?, Some(id_arg(args)?)).await?,
            "delete" => self.delete(entity_arg(args)?, id_arg(args)?).await?,
            "filter" => {
                let status = args.join(" ");
                if status.is_empty() {
                    return Err(Error::validation(
                        "status",
                        format!("choose one of {STATUS_ALL}, {}", INQUIRY_STATUSES.join(", ")),
                    ));
                }
                let listings = inquiry::filter_inquiries_by_status(self.db(), &status).await?;
                self.print_table::<InquiryRow>(rows(&listings))?;
            }
            other => {
                return Err(Error::validation(
                    "command",
                    format!("unknown command '{other}', type 'help'"),
                ));
            }
        }
        Ok(Flow::Continue)
    }

    /// Lists or searches; an empty term lists everything.
    async fn search(&mut self, entity: Entity, term: &str) -> Result<()> {
        let db = self.db();
        match entity {
            Entity::Property => {
                let listings = property::search_properties(db, term).await?;
                self.print_table::<PropertyRow>(rows(&listings))
            }
            Entity::Agent => {
                let agents = agent::search_agents(db, term).await?;
                self.print_table::<AgentRow>(rows(&agents))
            }
            Entity::Inquiry => {
                let listings = inquiry::search_inquiries(db, term).await?;
                self.print_table::<InquiryRow>(rows(&listings))
            }
            Entity::Marketing => {
                let listings = marketing::search_marketing(db, term).await?;
                self.print_table::<MarketingRow>(rows(&listings))
            }
        }
    }

    async fn show(&mut self, entity: Entity, id: i64) -> Result<()> {
        let db = self.db();
        let not_found = || Error::NotFound {
            entity: entity.name(),
            id,
        };

        let fields: Vec<(&str, String)> = match entity {
            Entity::Property => {
                let p = property::get_property_by_id(db, id).await?.ok_or_else(not_found)?;
                vec![
                    ("Address", p.address),
                    ("Type", p.property_type),
                    ("Bedrooms", format_bedrooms(p.bedrooms)),
                    ("Bathrooms", format_bathrooms(p.bathrooms)),
                    ("Price", format_price(p.price)),
                    ("Status", display_text(p.status.as_deref())),
                    ("Listed", format_date(p.listing_date)),
                    (
                        "Agent",
                        or_placeholder(
                            self.agent_label(p.agent_id).await?.as_deref(),
                            PROPERTY_AGENT_PLACEHOLDER,
                        ),
                    ),
                    ("Description", display_text(p.description.as_deref())),
                ]
            }
            Entity::Agent => {
                let a = agent::get_agent_by_id(db, id).await?.ok_or_else(not_found)?;
                vec![
                    ("Name", a.name),
                    ("Phone", display_text(a.phone.as_deref())),
                    ("Email", display_text(a.email.as_deref())),
                    ("License #", display_text(a.license_number.as_deref())),
                    ("Joined", format_date(a.join_date)),
                    ("Commission", format_percentage(a.commission_rate)),
                ]
            }
            Entity::Inquiry => {
                let i = inquiry::get_inquiry_by_id(db, id).await?.ok_or_else(not_found)?;
                let property_label = match i.property_id {
                    Some(property_id) => property::get_property_by_id(db, property_id)
                        .await?
                        .map(|p| Choice { id: p.id, label: p.address }.to_string()),
                    None => None,
                };
                vec![
                    ("Client", i.client_name),
                    ("Contact", display_text(i.contact_info.as_deref())),
                    (
                        "Property",
                        or_placeholder(property_label.as_deref(), INQUIRY_PROPERTY_PLACEHOLDER),
                    ),
                    ("Date", format_date(i.inquiry_date)),
                    (
                        "Status",
                        or_placeholder(i.status.as_deref(), INQUIRY_STATUS_PLACEHOLDER),
                    ),
                    (
                        "Agent",
                        or_placeholder(
                            self.agent_label(i.agent_id).await?.as_deref(),
                            INQUIRY_AGENT_PLACEHOLDER,
                        ),
                    ),
                    ("Notes", display_text(i.notes.as_deref())),
                ]
            }
            Entity::Marketing => {
                let m = marketing::get_marketing_by_id(db, id).await?.ok_or_else(not_found)?;
                vec![
                    ("Address", m.address),
                    ("Type", m.marketing_type),
                    ("Bedrooms", format_bedrooms(m.bedrooms)),
                    ("Bathrooms", format_bathrooms(m.bathrooms)),
                    ("Price", format_price(m.price)),
                    ("Status", display_text(m.status.as_deref())),
                    ("Listed", format_date(m.listing_date)),
                    (
                        "Agent",
                        or_placeholder(
                            self.agent_label(m.agent_id).await?.as_deref(),
                            MARKETING_AGENT_PLACEHOLDER,
                        ),
                    ),
                    ("Description", display_text(m.description.as_deref())),
                ]
            }
        };

        writeln!(self.output, "{} {}", entity.name(), id)?;
        for (label, value) in fields {
            writeln!(self.output, "  {label:<12} {value}")?;
        }
        Ok(())
    }

    async fn agent_label(&self, agent_id: Option<i64>) -> Result<Option<String>> {
        let Some(agent_id) = agent_id else {
            return Ok(None);
        };
        Ok(agent::get_agent_by_id(self.db(), agent_id)
            .await?
            .map(|a| Choice { id: a.id, label: a.name }.to_string()))
    }

    /// Runs the add (`id == None`) or update form for one record.
    async fn save(&mut self, entity: Entity, id: Option<i64>) -> Result<()> {
        let db = self.db();
        let not_found = |id| Error::NotFound {
            entity: entity.name(),
            id,
        };

        let saved_id = match entity {
            Entity::Property => {
                let existing = match id {
                    Some(id) => Some(property::get_property_by_id(db, id).await?.ok_or_else(|| not_found(id))?),
                    None => None,
                };
                let form = self.listing_form(existing.as_ref().map(ListingFields::from)).await?;
                let input = PropertyForm {
                    address: form.address,
                    property_type: form.kind,
                    bedrooms: form.bedrooms,
                    bathrooms: form.bathrooms,
                    price: form.price,
                    status: form.status,
                    agent_id: form.agent_id,
                    description: form.description,
                }
                .validate()?;
                match id {
                    Some(id) => property::update_property(db, id, input).await?.id,
                    None => property::create_property(db, input).await?.id,
                }
            }
            Entity::Marketing => {
                let existing = match id {
                    Some(id) => Some(marketing::get_marketing_by_id(db, id).await?.ok_or_else(|| not_found(id))?),
                    None => None,
                };
                let form = self.listing_form(existing.as_ref().map(ListingFields::from)).await?;
                let input = MarketingForm {
                    address: form.address,
                    marketing_type: form.kind,
                    bedrooms: form.bedrooms,
                    bathrooms: form.bathrooms,
                    price: form.price,
                    status: form.status,
                    agent_id: form.agent_id,
                    description: form.description,
                }
                .validate()?;
                match id {
                    Some(id) => marketing::update_marketing(db, id, input).await?.id,
                    None => marketing::create_marketing(db, input).await?.id,
                }
            }
            Entity::Agent => {
                let existing = match id {
                    Some(id) => Some(agent::get_agent_by_id(db, id).await?.ok_or_else(|| not_found(id))?),
                    None => None,
                };
                let a = existing.as_ref();
                let input = AgentForm {
                    name: self.ask_or_keep("Name", a.map_or("", |a| a.name.as_str()))?,
                    phone: self.ask_or_keep("Phone", &current(a.and_then(|a| a.phone.as_ref())))?,
                    email: self.ask_or_keep("Email", &current(a.and_then(|a| a.email.as_ref())))?,
                    license_number: self.ask_or_keep(
                        "License #",
                        &current(a.and_then(|a| a.license_number.as_ref())),
                    )?,
                    commission_rate: self.ask_or_keep(
                        "Commission %",
                        &current(a.and_then(|a| a.commission_rate)),
                    )?,
                }
                .validate()?;
                match id {
                    Some(id) => agent::update_agent(db, id, input).await?.id,
                    None => agent::create_agent(db, input).await?.id,
                }
            }
            Entity::Inquiry => {
                let existing = match id {
                    Some(id) => Some(inquiry::get_inquiry_by_id(db, id).await?.ok_or_else(|| not_found(id))?),
                    None => None,
                };
                let i = existing.as_ref();
                let client_name = self.ask_or_keep("Client Name", i.map_or("", |i| i.client_name.as_str()))?;
                let contact_info =
                    self.ask_or_keep("Contact Info", &current(i.and_then(|i| i.contact_info.as_ref())))?;
                let properties = selector::property_choices(db).await?;
                let property_id = self.ask_choice("Property", &properties, i.and_then(|i| i.property_id))?;
                let status = self.ask_or_keep(
                    &format!("Status ({})", INQUIRY_STATUSES.join("/")),
                    &current(i.and_then(|i| i.status.as_ref())),
                )?;
                let agents = selector::agent_choices(db).await?;
                let agent_id = self.ask_choice("Agent", &agents, i.and_then(|i| i.agent_id))?;
                let notes = self.ask_or_keep("Notes", &current(i.and_then(|i| i.notes.as_ref())))?;

                let input = InquiryForm {
                    client_name,
                    contact_info,
                    property_id,
                    status,
                    notes,
                    agent_id,
                }
                .validate()?;
                match id {
                    Some(id) => inquiry::update_inquiry(db, id, input).await?.id,
                    None => inquiry::create_inquiry(db, input).await?.id,
                }
            }
        };

        let verb = if id.is_some() { "updated" } else { "added" };
        info!(id = saved_id, "{} {}", entity.name(), verb);
        writeln!(self.output, "{} {} {}.", entity.name(), saved_id, verb)?;
        Ok(())
    }

    /// Prompts for the fields shared by properties and marketing entries.
    async fn listing_form(&mut self, existing: Option<ListingFields>) -> Result<ListingFields> {
        let e = existing.unwrap_or_default();
        let address = self.ask_or_keep("Address", &e.address)?;
        let kind = self.ask_or_keep(&format!("Type ({})", PROPERTY_TYPES.join("/")), &e.kind)?;
        let bedrooms = self.ask_or_keep("Bedrooms", &e.bedrooms)?;
        let bathrooms = self.ask_or_keep("Bathrooms", &e.bathrooms)?;
        let price = self.ask_or_keep("Price (₹)", &e.price)?;
        let status = self.ask_or_keep(&format!("Status ({})", LISTING_STATUSES.join("/")), &e.status)?;
        let agents = selector::agent_choices(self.db()).await?;
        let agent_id = self.ask_choice("Agent", &agents, e.agent_id)?;
        let description = self.ask_or_keep("Description", &e.description)?;
        Ok(ListingFields {
            address,
            kind,
            bedrooms,
            bathrooms,
            price,
            status,
            agent_id,
            description,
        })
    }

    async fn delete(&mut self, entity: Entity, id: i64) -> Result<()> {
        let db = self.db();
        let question = match entity {
            Entity::Property => format!("Delete property {id} and all of its inquiries?"),
            Entity::Agent => format!("Delete agent {id}? Their records will become unassigned."),
            Entity::Inquiry => format!("Delete inquiry {id}?"),
            Entity::Marketing => format!("Delete marketing entry {id}?"),
        };
        if !self.confirm(&question)? {
            writeln!(self.output, "Cancelled.")?;
            return Ok(());
        }

        match entity {
            Entity::Property => {
                let removed = property::delete_property(db, id).await?;
                writeln!(
                    self.output,
                    "Property {id} deleted with {removed} {}.",
                    plural(removed, "inquiry", "inquiries")
                )?;
            }
            Entity::Agent => {
                let AgentDeletion {
                    properties_unassigned: properties,
                    inquiries_unassigned: inquiries,
                    marketing_unassigned: entries,
                } = agent::delete_agent(db, id).await?;
                writeln!(
                    self.output,
                    "Agent {id} deleted; unassigned {properties} {}, {inquiries} {}, {entries} marketing {}.",
                    plural(properties, "property", "properties"),
                    plural(inquiries, "inquiry", "inquiries"),
                    plural(entries, "entry", "entries"),
                )?;
            }
            Entity::Inquiry => {
                inquiry::delete_inquiry(db, id).await?;
                writeln!(self.output, "Inquiry {id} deleted.")?;
            }
            Entity::Marketing => {
                marketing::delete_marketing(db, id).await?;
                writeln!(self.output, "Marketing entry {id} deleted.")?;
            }
        }
        Ok(())
    }
}

/// Text fields common to the property and marketing forms.
#[derive(Debug, Default)]
struct ListingFields {
    address: String,
    kind: String,
    bedrooms: String,
    bathrooms: String,
    price: String,
    status: String,
    agent_id: Option<i64>,
    description: String,
}

impl From<&crate::entities::property::Model> for ListingFields {
    fn from(p: &crate::entities::property::Model) -> Self {
        Self {
            address: p.address.clone(),
            kind: p.property_type.clone(),
            bedrooms: current(p.bedrooms),
            bathrooms: current(p.bathrooms),
            price: current(p.price),
            status: current(p.status.as_ref()),
            agent_id: p.agent_id,
            description: current(p.description.as_ref()),
        }
    }
}

impl From<&crate::entities::marketing::Model> for ListingFields {
    fn from(m: &crate::entities::marketing::Model) -> Self {
        Self {
            address: m.address.clone(),
            kind: m.marketing_type.clone(),
            bedrooms: current(m.bedrooms),
            bathrooms: current(m.bathrooms),
            price: current(m.price),
            status: current(m.status.as_ref()),
            agent_id: m.agent_id,
            description: current(m.description.as_ref()),
        }
    }
}
