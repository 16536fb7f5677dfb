//! Playbook content: value propositions and engagement scripts

/// A core pitch angle for the formal invitation
#[derive(Debug, Clone, Copy)]
pub struct ValueProp {
    pub title: &'static str,
    pub body: &'static str,
}

/// One day of the engagement playbook
#[derive(Debug, Clone, Copy)]
pub struct DayScript {
    /// Pipeline day (4, 5, 6)
    pub day: u8,
    pub title: &'static str,
    pub objective: &'static str,
    pub script: &'static str,
}

/// The three pitch angles shown on the scripts view
pub fn value_props() -> &'static [ValueProp] {
    &[
        ValueProp {
            title: "1. Meritocracy Engine",
            body: "Zero bots. Highlight the member score system ensuring they \
                   speak to a real, highly-engaged human audience.",
        },
        ValueProp {
            title: "2. Cross-Pollination",
            body: "Expand audience reach. Introduce them to a forward-thinking \
                   demographic outside the usual platform algorithms.",
        },
        ValueProp {
            title: "3. The \"Next Internet\"",
            body: "A safe entry to new communities. Emphasize a compliant, \
                   professionally backed environment.",
        },
    ]
}

/// The scripted touchpoints for days 4 through 6
pub fn day_scripts() -> &'static [DayScript] {
    &[
        DayScript {
            day: 4,
            title: "Direct Intellectual Engagement",
            objective: "Establish direct communication based on mutual interests.",
            script: "I loved your recent chapter on [Topic]. Have you ever \
                     considered how decentralized networks might impact that \
                     specific dynamic?",
        },
        DayScript {
            day: 5,
            title: "Contextual Seeding",
            objective: "Prime the creator for the community.",
            script: "We were actually just discussing this exact concept in \
                     the community today. A lot of our members are fascinated \
                     by your take on [Topic].",
        },
        DayScript {
            day: 6,
            title: "The Formal Invitation (The Ask)",
            objective: "Execute the speaker pitch.",
            script: "Hi [Name], I've been a massive fan of your work this \
                     week, especially your thoughts on [Topic]. I help run \
                     community events and our members are highly vetted and \
                     deeply interested in your field. We would be honored to \
                     host you for a 30-minute AMA or guest speaker session. \
                     It's a great way to introduce your work to a dedicated, \
                     new audience. Let me know if you'd be open to a quick \
                     chat about it!",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_scripts_cover_days_4_to_6() {
        let days: Vec<u8> = day_scripts().iter().map(|s| s.day).collect();
        assert_eq!(days, vec![4, 5, 6]);
    }

    #[test]
    fn test_three_value_props() {
        assert_eq!(value_props().len(), 3);
    }
}
