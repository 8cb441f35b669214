//! Built-in sample levels.

use super::level::{Indicator, Level};

fn phrase(text: &str) -> Indicator {
    Indicator::Phrase(text.to_string())
}

/// The two sample levels shipped with the engine: a classic bank-alert
/// phishing email and a plausible-looking partnership cold call whose only
/// tell is the sender domain.
pub fn builtin_levels() -> Vec<Level> {
    vec![
        Level {
            id: "level-1".into(),
            subject: "Important: Verify your account".into(),
            from_name: "Bank Security Team".into(),
            from_email: "support@bank-example.com".into(),
            date: Some("Today".into()),
            paragraphs: vec![
                "Dear user,".into(),
                "Your bank account has been temporarily suspended due to unusual activity.".into(),
                "Please verify your identity by clicking the link below immediately:".into(),
                "https://secure-login-bank-example.com".into(),
                "Failure to do so may result in permanent account closure.".into(),
                "Best regards,".into(),
                "Bank Security Team".into(),
            ],
            ground_truth: vec![
                phrase("suspended"),
                phrase("unusual activity"),
                phrase("secure-login-bank-example.com"),
                phrase("verify your identity"),
            ],
            is_phishing: true,
            difficulty: None,
        },
        Level {
            id: "level-2".into(),
            subject: "Quick question about partnership".into(),
            from_name: "Riley Thompson".into(),
            from_email: "rthompson@biztechsolutions.com".into(),
            date: Some("Yesterday".into()),
            paragraphs: vec![
                "Hello Robin,".into(),
                "I hope this finds you well. I've been closely following your company's rapid \
                 growth and impressive digital innovations over the past year.".into(),
                "At BizTech Solutions, we've recently launched a platform that I believe could \
                 align perfectly with your current objectives and further streamline your \
                 operations.".into(),
                "I'd love the chance to discuss how we might be a good fit for your team. Would \
                 you be available for a brief call next week, perhaps Wednesday at 10 AM?".into(),
                "Looking forward to connecting.".into(),
                "Warm regards,".into(),
                "Riley Thompson\nSenior B2B Solutions Specialist\nBizTech Solutions".into(),
            ],
            ground_truth: vec![phrase("biztechsolutions.com")],
            is_phishing: true,
            difficulty: None,
        },
    ]
}
