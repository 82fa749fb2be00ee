// Admin dashboard models. The admin view ships with hardcoded sample data;
// there is no backend integration behind it yet.

#[derive(Clone, PartialEq, Debug)]
pub struct MarketplaceStats {
    pub active_sellers: u32,
    pub active_buyers: u32,
    pub open_engagements: u32,
    pub pending_approvals: u32,
}

#[derive(Clone, PartialEq, Debug)]
pub struct PendingSeller {
    pub display_name: String,
    pub title: String,
    pub location: String,
    pub submitted_on: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReviewDecision {
    Pending,
    Approved,
    Rejected,
}

impl MarketplaceStats {
    pub fn sample() -> Self {
        Self {
            active_sellers: 148,
            active_buyers: 392,
            open_engagements: 57,
            pending_approvals: 4,
        }
    }
}

pub fn sample_pending_sellers() -> Vec<PendingSeller> {
    vec![
        PendingSeller {
            display_name: "Priya Nair".to_string(),
            title: "Oracle EBS Financials Consultant".to_string(),
            location: "Pune, India".to_string(),
            submitted_on: "2024-03-02".to_string(),
        },
        PendingSeller {
            display_name: "Jonas Weber".to_string(),
            title: "SAP S/4HANA Logistics Lead".to_string(),
            location: "Munich, Germany".to_string(),
            submitted_on: "2024-03-03".to_string(),
        },
        PendingSeller {
            display_name: "Sofia Ramos".to_string(),
            title: "Dynamics 365 F&O Architect".to_string(),
            location: "Lisbon, Portugal".to_string(),
            submitted_on: "2024-03-05".to_string(),
        },
        PendingSeller {
            display_name: "Mark Okonkwo".to_string(),
            title: "SAP BW/BI Consultant".to_string(),
            location: "Lagos, Nigeria".to_string(),
            submitted_on: "2024-03-06".to_string(),
        },
    ]
}
