use askama::Template;
use axum::response::{Html, IntoResponse};

/// One card in the "What We Handle" service grid.
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: [&'static str; 3],
}

/// One card in the "Why Choose Us" feature grid.
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub stats: &'static str,
}

const FLIP_WORDS: [&str; 5] = [
    "Overheads",
    "Paperwork",
    "Complexity",
    "Financial Stress",
    "Admin",
];

const PARTNERS: [&str; 8] = [
    "QuickBooks",
    "SAP ERP",
    "Oracle Financials",
    "Workday Financial",
    "Microsoft Dynamics",
    "Xero",
    "Sage",
    "Stripe",
];

const SERVICES: [Service; 3] = [
    Service {
        title: "Full-Service Bookkeeping",
        description: "24/7 transaction processing, reconciliation, and reporting - all handled by our dedicated team",
        icon: "\u{1F4CA}",
        features: [
            "Daily transaction management",
            "Monthly reconciliation",
            "Custom financial reports",
        ],
    },
    Service {
        title: "Payroll & HR Admin",
        description: "End-to-end payroll processing and HR administrative support at a fraction of the cost",
        icon: "\u{1F310}",
        features: [
            "Payroll processing",
            "Tax documentation",
            "Benefits administration",
        ],
    },
    Service {
        title: "Financial Reporting",
        description: "Comprehensive financial insights and analysis delivered to your inbox",
        icon: "\u{1F3AF}",
        features: [
            "Monthly statements",
            "Performance metrics",
            "Growth analysis",
        ],
    },
];

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Cost Savings",
        description: "Reduce your financial operations costs by up to 70% compared to in-house teams",
        stats: "70% Average Savings",
    },
    Feature {
        title: "24/7 Operations",
        description: "Round-the-clock financial management and support for your business",
        stats: "24/7 Availability",
    },
    Feature {
        title: "Rapid Scaling",
        description: "Flexible solutions that grow with your business needs without additional overhead",
        stats: "Unlimited Scalability",
    },
    Feature {
        title: "Quality Assured",
        description: "Multi-layer verification process ensuring accuracy in every transaction",
        stats: "99.9% Accuracy Rate",
    },
];

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {
    flip_words: &'static [&'static str],
    partners: &'static [&'static str],
    services: &'static [Service],
    features: &'static [Feature],
}

/// GET / - Landing page
pub async fn page() -> impl IntoResponse {
    let template = LandingTemplate {
        flip_words: &FLIP_WORDS,
        partners: &PARTNERS,
        services: &SERVICES,
        features: &FEATURES,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Failed to render landing template: {}", e);
        format!("Error rendering template: {}", e)
    }))
}
