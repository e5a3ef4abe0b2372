pub use super::contact_message::Entity as ContactMessage;
pub use super::discord_link::Entity as DiscordLink;
pub use super::page_content::Entity as PageContent;
pub use super::profile::Entity as Profile;
pub use super::team_request::Entity as TeamRequest;
