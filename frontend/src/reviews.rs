/// A customer review shown in the testimonials carousel.
///
/// Reviews are compiled into the bundle; nothing creates or edits them at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    pub id: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub quote_text: &'static str,
    pub rating: f32,
}

impl Review {
    /// Quote cut down to at most `max_chars` characters, ending on a word boundary.
    pub fn preview(&self, max_chars: usize) -> String {
        let text = self.quote_text;
        let cut = match text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => byte_idx,
            None => return text.to_string(),
        };

        let head = &text[..cut];
        let rest_starts_word = text[cut..].starts_with(char::is_whitespace);
        let head = if rest_starts_word {
            head
        } else {
            match head.rfind(char::is_whitespace) {
                Some(space) if space > 0 => &head[..space],
                _ => head,
            }
        };

        let head = head.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | ';' | ':'));
        format!("{}…", head)
    }

    pub fn is_truncated(&self, max_chars: usize) -> bool {
        self.quote_text.chars().count() > max_chars
    }

    pub fn filled_stars(&self) -> u8 {
        // NaN falls through the clamp and casts to 0
        self.rating.clamp(0.0, 5.0).round() as u8
    }

    pub fn attribution(&self) -> String {
        if self.organization.is_empty() {
            self.role.to_string()
        } else {
            format!("{}, {}", self.role, self.organization)
        }
    }
}

pub const REVIEWS: &[Review] = &[
    Review {
        id: "r-ferbo",
        author: "Mariela Ferbo",
        role: "CISO",
        organization: "TechStart Ltd.",
        date: "March 2025",
        quote_text: "ThreatAtlas Pro cut our incident response time by 60% and gave us the proactive visibility we needed to stay ahead of advanced cyber threats. The analysts on our team finally spend their day on investigations instead of copying indicators between six different consoles.",
        rating: 5.0,
    },
    Review {
        id: "r-kordzangeneh",
        author: "Mostafa KordZangeneh",
        role: "Head of Security",
        organization: "CloudCore",
        date: "February 2025",
        quote_text: "The platform's dark web monitoring uncovered exposed credentials within hours, preventing a major account compromise.",
        rating: 5.0,
    },
    Review {
        id: "r-mendez",
        author: "Carlos Méndez",
        role: "CEO",
        organization: "AgroTech",
        date: "January 2025",
        quote_text: "ThreatAtlas Pro completely transformed the way we think about supplier risk. We now get a warning when a vendor's infrastructure shows up in a campaign, long before it reaches our network. Highly recommended!",
        rating: 4.5,
    },
    Review {
        id: "r-ramirez",
        author: "Lucía Ramírez",
        role: "Founder",
        organization: "VitaCoach",
        date: "December 2024",
        quote_text: "Professional, attentive, and real results in just weeks. We're incredibly satisfied.",
        rating: 5.0,
    },
    Review {
        id: "r-okafor",
        author: "Daniel Okafor",
        role: "SOC Lead",
        organization: "Meridian Health",
        date: "November 2024",
        quote_text: "MITRE ATT&CK mapping made our detection gaps obvious in the first week. We used the coverage report to justify two new hires and a rework of our EDR rules, and the follow-up scan showed the gaps closing.",
        rating: 4.0,
    },
    Review {
        id: "r-lindqvist",
        author: "Sara Lindqvist",
        role: "Security Architect",
        organization: "",
        date: "October 2024",
        quote_text: "IOC enrichment that actually tells you whether an indicator matters. False positives dropped enough that our on-call rotation stopped dreading weekends.",
        rating: 4.5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn review(quote_text: &'static str, rating: f32) -> Review {
        Review {
            id: "t",
            author: "Test Author",
            role: "Analyst",
            organization: "Acme",
            date: "May 2025",
            quote_text,
            rating,
        }
    }

    #[test]
    fn short_quote_is_not_truncated() {
        let r = review("Short and sweet.", 5.0);
        assert_eq!(r.preview(40), "Short and sweet.");
        assert!(!r.is_truncated(40));
    }

    #[test]
    fn preview_cuts_on_word_boundary() {
        let r = review("The quick brown fox jumps over the lazy dog", 5.0);
        // char 12 lands inside "brown"
        assert_eq!(r.preview(12), "The quick…");
        assert!(r.is_truncated(12));
    }

    #[test]
    fn preview_keeps_word_that_ends_exactly_at_limit() {
        let r = review("The quick brown fox", 5.0);
        assert_eq!(r.preview(15), "The quick brown…");
    }

    #[test]
    fn preview_drops_trailing_punctuation() {
        let r = review("Fast, reliable, and accurate results", 5.0);
        assert_eq!(r.preview(16), "Fast, reliable…");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let r = review("Méndez Ramírez Lucía Ñandú", 5.0);
        assert_eq!(r.preview(16), "Méndez Ramírez…");
    }

    #[test]
    fn single_long_word_is_hard_cut() {
        let r = review("Supercalifragilisticexpialidocious", 5.0);
        assert_eq!(r.preview(5), "Super…");
    }

    #[test]
    fn stars_are_clamped_and_rounded() {
        assert_eq!(review("x", 4.5).filled_stars(), 5);
        assert_eq!(review("x", 4.4).filled_stars(), 4);
        assert_eq!(review("x", 7.0).filled_stars(), 5);
        assert_eq!(review("x", -1.0).filled_stars(), 0);
        assert_eq!(review("x", f32::NAN).filled_stars(), 0);
    }

    #[test]
    fn attribution_omits_empty_organization() {
        assert_eq!(review("x", 5.0).attribution(), "Analyst, Acme");
        let mut solo = review("x", 5.0);
        solo.organization = "";
        assert_eq!(solo.attribution(), "Analyst");
    }

    #[test]
    fn bundled_reviews_have_unique_ids_and_valid_ratings() {
        let mut ids: Vec<_> = REVIEWS.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), REVIEWS.len());
        assert!(REVIEWS.iter().all(|r| (0.0..=5.0).contains(&r.rating)));
    }
}
