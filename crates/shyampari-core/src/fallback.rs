//! Fallback responder: canned answers selected by ordered keyword groups.
//!
//! Matching is plain substring search over the lowercased message, so short
//! keywords such as "hi" or "ib" also match inside longer words. The first
//! group in [`RESPONSE_TABLE`] with any hit wins; later groups are never
//! consulted. Several keywords appear in more than one group ("location" is in
//! both [`Topic::Contact`] and [`Topic::Location`]); table order decides.

/// Keyword group, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Greeting,
    Services,
    Demo,
    Fees,
    Boards,
    Tutors,
    Contact,
    Timing,
    Location,
    Affirmation,
}

/// One row of the cascade.
#[derive(Debug)]
pub struct ResponseGroup {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl ResponseGroup {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Ordered cascade. Earlier rows take precedence.
pub const RESPONSE_TABLE: &[ResponseGroup] = &[
    ResponseGroup {
        topic: Topic::Greeting,
        keywords: &["hello", "hi", "hey", "namaste", "good morning", "good evening", "good afternoon"],
        response: GREETING_RESPONSE,
    },
    ResponseGroup {
        topic: Topic::Services,
        keywords: &["service", "what do you offer", "what you provide", "tell me about"],
        response: SERVICES_RESPONSE,
    },
    ResponseGroup {
        topic: Topic::Demo,
        keywords: &["demo", "trial", "test", "sample", "try"],
        response: DEMO_RESPONSE,
    },
    ResponseGroup {
        topic: Topic::Fees,
        keywords: &["fee", "cost", "price", "charge", "expensive", "affordable", "money"],
        response: FEES_RESPONSE,
    },
    ResponseGroup {
        topic: Topic::Boards,
        keywords: &["board", "curriculum", "syllabus", "icse", "igcse", "cbse", "ib", "a-level"],
        response: BOARDS_RESPONSE,
    },
    ResponseGroup {
        topic: Topic::Tutors,
        keywords: &["tutor", "teacher", "educator", "faculty", "instructor"],
        response: TUTORS_RESPONSE,
    },
    ResponseGroup {
        topic: Topic::Contact,
        keywords: &["contact", "reach", "call", "phone", "address", "location"],
        response: CONTACT_RESPONSE,
    },
    ResponseGroup {
        topic: Topic::Timing,
        keywords: &["time", "timing", "schedule", "when", "available", "hours"],
        response: TIMING_RESPONSE,
    },
    ResponseGroup {
        topic: Topic::Location,
        keywords: &["where", "location", "pune", "maharashtra", "area", "nearby"],
        response: LOCATION_RESPONSE,
    },
    ResponseGroup {
        topic: Topic::Affirmation,
        keywords: &["really", "sure", "certain", "true", "confirm"],
        response: AFFIRMATION_RESPONSE,
    },
];

/// First matching group for `message`, if any.
pub fn classify(message: &str) -> Option<Topic> {
    let lowered = message.to_lowercase();
    RESPONSE_TABLE
        .iter()
        .find(|g| g.matches(&lowered))
        .map(|g| g.topic)
}

/// Canned text for `topic`.
pub fn response_for(topic: Topic) -> &'static str {
    RESPONSE_TABLE
        .iter()
        .find(|g| g.topic == topic)
        .map(|g| g.response)
        .unwrap_or(GENERIC_RESPONSE)
}

/// Canned answer for `message`. Total: unmatched input gets [`GENERIC_RESPONSE`].
pub fn fallback_response(message: &str) -> &'static str {
    classify(message).map(response_for).unwrap_or(GENERIC_RESPONSE)
}

pub const GREETING_RESPONSE: &str = "Hello! 👋 Welcome to Shyampari Edutech. I'm here to help you learn about our premium tutoring services for ICSE, IGCSE, CBSE, IB, and A-Level boards. What would you like to know?";

pub const SERVICES_RESPONSE: &str = "We offer comprehensive tutoring services:

🎯 **Personalized Learning:**
• One-on-one tutoring with qualified educators
• Small group classes (3-5 students)
• Assessment-based customized learning plans

📚 **Boards Supported:** ICSE, IGCSE, CBSE, IB, A-Level

🌟 **Key Features:**
• 24/7 coordinator support
• Monthly progress reports
• Demo classes available (₹500)
• Tutor replacement guarantee within 2 weeks

Would you like to know about our demo process or fee structure?";

pub const DEMO_RESPONSE: &str = "📝 **Demo Class Process:**

1️⃣ Initial coordinator call to discuss your needs
2️⃣ WhatsApp communication and location sharing
3️⃣ Demo registration with ₹500 fee (negotiable)
4️⃣ Teacher profile shared within 2-3 days
5️⃣ 20-30 minute demo class
6️⃣ Feedback collection and teacher finalization

Demo fee: **₹500** (subject to negotiation)

Ready to book a demo? Contact our coordinator at contact@shyampariedutech.com";

pub const FEES_RESPONSE: &str = "💰 **Fee Structure:**

• **Demo fee:** ₹500 (negotiable)
• **Payment packages:** 1, 3, or 6 months
• **Pricing varies** based on:
  - Subject and grade level
  - Tutoring mode (online/offline)
  - Individual or group sessions

For detailed fee structure tailored to your requirements, please contact:
📧 contact@shyampariedutech.com
🌐 https://www.shyampariedutech.com";

pub const BOARDS_RESPONSE: &str = "📖 **Educational Boards We Support:**

✅ **ICSE** - Indian Certificate of Secondary Education
✅ **IGCSE** - International General Certificate of Secondary Education
✅ **CBSE** - Central Board of Secondary Education
✅ **IB** - International Baccalaureate
✅ **A-Level** - Advanced Level qualifications

Our tutors provide **board-specific lessons** aligned with exam patterns and focus on concept-driven teaching for strong foundational understanding.";

pub const TUTORS_RESPONSE: &str = "👨‍🏫 **Our Expert Tutors:**

🎓 **Qualifications:**
• STEM backgrounds (Engineering, Pharmacy, BSc-MSc)
• Many are JEE/GATE qualified
• Proven teaching experience

📍 **Location:** Within 5km of your location for better continuity

💼 **Experience:**
• Home tuitions
• Coaching institutes
• School teaching

🔄 **Guarantee:** Tutor replacement within 2 weeks if needed

Want to meet our tutors? Book a demo class!";

pub const CONTACT_RESPONSE: &str = "📞 **Get In Touch:**

📧 **Email:** contact@shyampariedutech.com
🌐 **Website:** https://www.shyampariedutech.com
📍 **Location:** Pune, Maharashtra

⏰ **Coordinator Support:** Available 24/7 to assist you with:
• Demo bookings
• Fee inquiries
• Tutor assignments
• Schedule management

Ready to start your learning journey? Contact us today!";

pub const TIMING_RESPONSE: &str = "⏰ **Flexible Scheduling:**

🕐 **Class Timings:** Completely flexible according to your convenience
📅 **Available:** 7 days a week
🌅 **Morning, afternoon, or evening** slots available
⚡ **Online & Offline** modes for maximum flexibility

📋 **Scheduling Process:**
• Discuss preferred timings during coordinator call
• Finalize schedule with your assigned tutor
• 24/7 coordinator support for any changes

Want to discuss your preferred schedule? Contact us for a demo!";

pub const LOCATION_RESPONSE: &str = "📍 **Location & Coverage:**

🏢 **Head Office:** Pune, Maharashtra
🚀 **Service Area:** Pune and surrounding areas
📏 **Tutor Distance:** Within 5km of your location for offline classes
🌐 **Online Classes:** Available anywhere with internet connection

🏠 **Home Tuitions:** We come to your location
💻 **Online Platform:** High-quality virtual classes with interactive tools

Based in Pune? Perfect! We can provide both online and offline services.";

pub const AFFIRMATION_RESPONSE: &str = "Absolutely! 🎯

Shyampari Edutech has been providing quality education services since 2017. Here's what makes us reliable:

✅ **Established Company:** 7+ years of experience
✅ **Qualified Tutors:** STEM graduates, JEE/GATE qualified
✅ **Proven Results:** Track record of student success
✅ **Professional Support:** 24/7 coordinator assistance
✅ **Quality Assurance:** Demo classes and tutor replacement guarantee

Want to experience it yourself? Book a demo class for just ₹500!

Any specific concerns you'd like me to address?";

pub const GENERIC_RESPONSE: &str = "Thank you for your interest in Shyampari Edutech! 🙏

For specific information about:
• **Tutoring services & subjects**
• **Demo class bookings**
• **Detailed fee structure**
• **Tutor assignments**

Please contact our coordinator:
📧 **Email:** contact@shyampariedutech.com
🌐 **Website:** https://www.shyampariedutech.com

Our team is available **24/7** to help you with personalized guidance!

Is there anything specific about our services you'd like to know?";
