//! Static page content. Read-only records consumed by the sections at render
//! time; sections must tolerate any of these being empty.

use serde::Serialize;

use crate::icons::IconId;

/// One entry of the services or features grids.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContentItem {
    pub id: &'static str,
    pub icon: IconId,
    pub title: &'static str,
    pub description: &'static str,
}

/// A numeric headline figure. `value` is the count-up animation target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stat {
    pub id: &'static str,
    pub value: f64,
    pub prefix: Option<&'static str>,
    pub suffix: Option<&'static str>,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
    pub cta_text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SocialLink {
    pub platform: &'static str,
    pub icon: IconId,
    pub href: &'static str,
}

pub const SERVICES: &[ContentItem] = &[
    ContentItem {
        id: "service-1",
        icon: IconId::Shield,
        title: "Threat Detection",
        description: "Advanced AI-powered threat detection and real-time monitoring to protect your infrastructure.",
    },
    ContentItem {
        id: "service-2",
        icon: IconId::Lock,
        title: "Data Encryption",
        description: "Military-grade encryption for data at rest and in transit, ensuring complete security.",
    },
    ContentItem {
        id: "service-3",
        icon: IconId::Eye,
        title: "Security Audits",
        description: "Comprehensive security assessments and penetration testing to identify vulnerabilities.",
    },
];

pub const FEATURES: &[ContentItem] = &[
    ContentItem {
        id: "feature-1",
        icon: IconId::Zap,
        title: "Real-Time Monitoring",
        description: "24/7 automated monitoring with instant alerts for suspicious activities.",
    },
    ContentItem {
        id: "feature-2",
        icon: IconId::Users,
        title: "Team Collaboration",
        description: "Secure collaboration tools with role-based access control.",
    },
    ContentItem {
        id: "feature-3",
        icon: IconId::FileCheck,
        title: "Compliance Ready",
        description: "Built-in compliance frameworks for GDPR, HIPAA, and SOC 2.",
    },
    ContentItem {
        id: "feature-4",
        icon: IconId::Server,
        title: "Infrastructure Protection",
        description: "Comprehensive protection for your servers and network infrastructure.",
    },
    ContentItem {
        id: "feature-5",
        icon: IconId::Cloud,
        title: "Cloud Security",
        description: "Multi-cloud security solutions for AWS, Azure, and Google Cloud.",
    },
    ContentItem {
        id: "feature-6",
        icon: IconId::Database,
        title: "Data Loss Prevention",
        description: "Advanced DLP solutions to prevent unauthorized data exfiltration.",
    },
];

pub const STATS: &[Stat] = &[
    Stat { id: "stat-1", value: 10_000.0, prefix: None, suffix: Some("+"), label: "Protected Systems" },
    Stat { id: "stat-2", value: 99.9, prefix: None, suffix: Some("%"), label: "Uptime Guarantee" },
    Stat { id: "stat-3", value: 500.0, prefix: None, suffix: Some("+"), label: "Enterprise Clients" },
    Stat { id: "stat-4", value: 24.0, prefix: None, suffix: Some("/7"), label: "Support Available" },
];

pub const ABOUT_FEATURES: &[ContentItem] = &[
    ContentItem {
        id: "about-feature-1",
        icon: IconId::CheckCircle,
        title: "Industry-Leading Expertise",
        description: "Over 15 years of experience in cybersecurity",
    },
    ContentItem {
        id: "about-feature-2",
        icon: IconId::CheckCircle,
        title: "Certified Professionals",
        description: "Team of certified security experts",
    },
    ContentItem {
        id: "about-feature-3",
        icon: IconId::CheckCircle,
        title: "24/7 Monitoring",
        description: "Round-the-clock security monitoring",
    },
    ContentItem {
        id: "about-feature-4",
        icon: IconId::CheckCircle,
        title: "Proven Track Record",
        description: "Successfully protected thousands of systems",
    },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { id: "about-stat-1", value: 15.0, prefix: None, suffix: Some("+"), label: "Years Experience" },
    Stat { id: "about-stat-2", value: 10_000.0, prefix: None, suffix: Some("+"), label: "Systems Protected" },
    Stat { id: "about-stat-3", value: 500.0, prefix: None, suffix: Some("+"), label: "Happy Clients" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "testimonial-1",
        name: "John Smith",
        company: "TechCorp Inc.",
        role: "CTO",
        avatar: "/images/avatars/john-smith.jpg",
        quote: "The security solutions provided have been exceptional. Our infrastructure has never been more secure.",
    },
    Testimonial {
        id: "testimonial-2",
        name: "Sarah Johnson",
        company: "DataSecure Ltd.",
        role: "Security Director",
        avatar: "/images/avatars/sarah-johnson.jpg",
        quote: "Outstanding service and support. The team is always responsive and proactive in addressing our security needs.",
    },
    Testimonial {
        id: "testimonial-3",
        name: "Michael Chen",
        company: "CloudTech Solutions",
        role: "CEO",
        avatar: "/images/avatars/michael-chen.jpg",
        quote: "Their comprehensive approach to cybersecurity has given us peace of mind. Highly recommended!",
    },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        id: "plan-1",
        name: "Starter",
        price: 99,
        period: "month",
        description: "Perfect for small teams",
        features: &[
            "Up to 10 users",
            "Basic threat detection",
            "Email support",
            "99% uptime SLA",
        ],
        featured: false,
        cta_text: "Get Started",
    },
    PricingPlan {
        id: "plan-2",
        name: "Professional",
        price: 299,
        period: "month",
        description: "For growing businesses",
        features: &[
            "Up to 50 users",
            "Advanced threat detection",
            "Priority support",
            "99.9% uptime SLA",
            "Custom integrations",
        ],
        featured: true,
        cta_text: "Start Free Trial",
    },
    PricingPlan {
        id: "plan-3",
        name: "Enterprise",
        price: 999,
        period: "month",
        description: "For large organizations",
        features: &[
            "Unlimited users",
            "AI-powered security",
            "24/7 dedicated support",
            "99.99% uptime SLA",
            "Custom integrations",
            "Compliance assistance",
        ],
        featured: false,
        cta_text: "Contact Sales",
    },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Quick Links",
        links: &[
            FooterLink { label: "Home", href: "#" },
            FooterLink { label: "Services", href: "#services" },
            FooterLink { label: "About", href: "#about" },
            FooterLink { label: "Pricing", href: "#pricing" },
        ],
    },
    FooterColumn {
        title: "Resources",
        links: &[
            FooterLink { label: "Documentation", href: "#" },
            FooterLink { label: "Blog", href: "#" },
            FooterLink { label: "Support", href: "#" },
            FooterLink { label: "Contact", href: "#" },
        ],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { platform: "Twitter", icon: IconId::Twitter, href: "#" },
    SocialLink { platform: "LinkedIn", icon: IconId::Linkedin, href: "#" },
    SocialLink { platform: "GitHub", icon: IconId::Github, href: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_sections_are_populated() {
        assert!(!SERVICES.is_empty());
        assert!(!FEATURES.is_empty());
        assert!(!STATS.is_empty());
        assert!(!ABOUT_FEATURES.is_empty());
        assert!(!ABOUT_STATS.is_empty());
        assert!(!TESTIMONIALS.is_empty());
        assert!(!PRICING_PLANS.is_empty());
        assert!(!FOOTER_COLUMNS.is_empty());
        assert!(!SOCIAL_LINKS.is_empty());
    }

    #[test]
    fn exactly_one_plan_is_featured() {
        // The layout highlights at most one plan; nothing in the rendering
        // code may assume one exists, but the shipped content carries one.
        let featured = PRICING_PLANS.iter().filter(|p| p.featured).count();
        assert_eq!(featured, 1);
    }

    #[test]
    fn content_records_serialize() {
        let value = serde_json::to_value(SERVICES[0]).unwrap();
        assert_eq!(value["id"], "service-1");
        assert_eq!(value["icon"], "shield");

        let stat = serde_json::to_value(STATS[1]).unwrap();
        assert_eq!(stat["value"], 99.9);
        assert_eq!(stat["suffix"], "%");
    }

    #[test]
    fn footer_links_have_labels_and_targets() {
        for column in FOOTER_COLUMNS {
            assert!(!column.links.is_empty());
            for link in column.links {
                assert!(!link.label.is_empty());
                assert!(!link.href.is_empty());
            }
        }
    }
}
