//! Bundled example messages for trying out the detector.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Scam,
    Legitimate,
}

#[derive(Debug, Clone, Copy)]
pub struct SampleMessage {
    pub title: &'static str,
    pub kind: SampleKind,
    pub text: &'static str,
}

pub const EXAMPLES: &[SampleMessage] = &[
    SampleMessage {
        title: "419 Scam Email",
        kind: SampleKind::Scam,
        text: "Dear Friend,\n\nI am Prince Abubakar from Nigeria. My late father, the King, left behind $15,000,000 USD in a private security company. I need your urgent assistance to transfer this money to your country. \n\nYou will receive 30% of the total sum for your cooperation. Please send your bank details and a small processing fee of $500 to initiate the transfer.\n\nKindly reply urgently as this matter is time-sensitive.\n\nBest regards,\nPrince Abubakar",
    },
    SampleMessage {
        title: "Lottery Scam",
        kind: SampleKind::Scam,
        text: "CONGRATULATIONS!!! \n\nYour email address has won \u{a3}1,500,000.00 GBP in our international lottery promotion. You were selected from millions of email addresses worldwide.\n\nTo claim your prize, contact our claims agent immediately at claims@lottery-winner.tk and provide:\n- Full name\n- Address  \n- Phone number\n- Bank account details\n- Copy of ID\n\nPay the processing fee of \u{a3}150 to receive your winnings within 48 hours.\n\nUK National Lottery Board",
    },
    SampleMessage {
        title: "Legitimate Email",
        kind: SampleKind::Legitimate,
        text: "Hi John,\n\nThanks for your order! Your package #12345 has shipped and should arrive by Friday.\n\nYou can track your delivery at our website using the tracking number above.\n\nIf you have any questions about your order, reply to this email or call our customer service at 1-800-555-0123.\n\nBest,\nCustomer Support Team\nAmazon.com",
    },
    SampleMessage {
        title: "Job Scam",
        kind: SampleKind::Scam,
        text: "WORK FROM HOME - EARN $5000/WEEK!\n\nNo experience needed! We are hiring data entry clerks immediately.\n\nJob requirements:\n- Must have bank account (for payment)\n- Pay $200 registration fee\n- Receive packages and forward them\n\nThis is a legitimate opportunity to work for an international trading company. Send your personal details and registration fee to get started TODAY!\n\nEmail: hr@quick-jobs-now.ru",
    },
];

/// Look up a bundled example by 1-based index (as shown by `examples`).
pub fn get(index: usize) -> Option<&'static SampleMessage> {
    if index == 0 {
        return None;
    }
    EXAMPLES.get(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_examples_are_bundled() {
        assert_eq!(EXAMPLES.len(), 4);
        assert_eq!(EXAMPLES[0].title, "419 Scam Email");
        assert!(EXAMPLES[0].text.contains("Prince Abubakar"));
    }

    #[test]
    fn lookup_is_one_based() {
        assert!(get(0).is_none());
        assert_eq!(get(1).unwrap().title, "419 Scam Email");
        assert_eq!(get(4).unwrap().title, "Job Scam");
        assert!(get(5).is_none());
    }

    #[test]
    fn no_example_is_blank() {
        for example in EXAMPLES {
            assert!(!example.text.trim().is_empty(), "{} is blank", example.title);
        }
    }
}
