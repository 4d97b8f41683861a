//! Prompt builder: renders the instruction string sent to the remote model.

use crate::knowledge::KnowledgeBase;

const RESPONSE_GUIDELINES: &str = "RESPONSE GUIDELINES:
- Be conversational, helpful, and professional
- Give specific information when possible
- For detailed pricing: mention demo fee but suggest contacting for full structure
- For bookings: encourage contacting coordinator
- Stay focused on educational services
- If unsure about specifics: suggest direct contact
- Keep responses concise but informative";

const TUTORS_SECTION: &str = "TUTORS:
• STEM backgrounds (Engineering, Pharmacy, BSc-MSc)
• JEE/GATE qualified
• Within 5km radius
• Home tuition/coaching experience";

const UNIQUE_FEATURES_SECTION: &str = "UNIQUE FEATURES:
• Tutor replacement within 2 weeks
• Counselling support
• Assessment-based planning
• Digital resource library";

/// System-role message sent ahead of the prompt.
pub fn system_instruction(knowledge: &KnowledgeBase) -> String {
    format!(
        "You are a helpful AI assistant for {}, providing information about their tutoring services.",
        knowledge.company_info.short_name()
    )
}

/// Compact fact sheet rendered from the knowledge base.
pub fn knowledge_summary(knowledge: &KnowledgeBase) -> String {
    let company = &knowledge.company_info;
    let contact = &knowledge.contact_info;
    let mut out = String::with_capacity(1024);

    out.push_str(&format!(
        "COMPANY: {} (Est. {}, {})\n",
        company.name,
        company.established,
        company.city()
    ));
    out.push_str(&format!("CONTACT: {} | {}\n\n", contact.email, contact.website));

    out.push_str("SERVICES:\n");
    out.push_str("• One-on-one & group tutoring (3-5 students)\n");
    if !company.boards_supported.is_empty() {
        out.push_str(&format!("• Boards: {}\n", company.boards_supported.join(", ")));
    }
    out.push_str("• Online & offline modes\n");
    out.push_str("• 24/7 coordinator support\n");
    out.push_str("• Monthly progress reports\n");
    out.push_str(&format!("• Demo classes: {}, 20-30 mins\n\n", knowledge.demo_fee));

    out.push_str(TUTORS_SECTION);
    out.push_str("\n\n");

    out.push_str("DEMO PROCESS:\n");
    out.push_str("1. Coordinator call\n");
    out.push_str("2. WhatsApp communication\n");
    out.push_str(&format!("3. {} demo fee\n", demo_fee_amount(&knowledge.demo_fee)));
    out.push_str("4. Teacher profile (2-3 days)\n");
    out.push_str("5. Demo class & feedback\n");
    out.push_str("6. Enrollment (1/3/6 month packages)\n\n");

    out.push_str(UNIQUE_FEATURES_SECTION);
    out.push('\n');
    out
}

/// Full instruction string: facts, guidelines, the literal user message, closing directive.
pub fn build_prompt(knowledge: &KnowledgeBase, user_message: &str) -> String {
    let company = &knowledge.company_info;
    format!(
        "You are an AI assistant for {name}, a premium tutoring service in {city}.\n\n{summary}\n{guidelines}\n\nUSER QUESTION: \"{message}\"\n\nProvide a helpful, accurate response about {name}'s services:",
        name = company.short_name(),
        city = company.city(),
        summary = knowledge_summary(knowledge),
        guidelines = RESPONSE_GUIDELINES,
        message = user_message,
    )
}

// "₹500 (negotiable)" -> "₹500"
fn demo_fee_amount(fee: &str) -> &str {
    fee.split(" (").next().unwrap_or(fee).trim()
}
