// Webhook constants
pub const WEBHOOK_URL: &str =
    "https://akcoe.app.n8n.cloud/webhook/e9062aec-0393-490e-81de-c6351e41c749";

// Canned conversation text
pub const GREETING: &str = "Hi! I'm your Calendar Assistant. I can help you create, update, delete, and list calendar events. Try saying 'list my events'";

pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error while processing your request. Please check your connection and try again.";
