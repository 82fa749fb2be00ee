// ============================================================================
// ADMIN DASHBOARD - marketplace overview
// ============================================================================
// Renders sample data only; approvals flip local state and go nowhere.
// The moderation endpoints are not wired up yet.
// ============================================================================

use std::collections::HashMap;

use yew::prelude::*;

use crate::models::admin::{sample_pending_sellers, MarketplaceStats, ReviewDecision};

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let stats = MarketplaceStats::sample();
    let pending = sample_pending_sellers();
    let decisions = use_state(HashMap::<usize, ReviewDecision>::new);

    let decide = {
        let decisions = decisions.clone();
        Callback::from(move |(index, decision): (usize, ReviewDecision)| {
            let mut next = (*decisions).clone();
            next.insert(index, decision);
            decisions.set(next);
        })
    };

    let rows = pending.iter().enumerate().map(|(index, seller)| {
        let decision = decisions
            .get(&index)
            .copied()
            .unwrap_or(ReviewDecision::Pending);

        let approve = {
            let decide = decide.clone();
            Callback::from(move |_: MouseEvent| decide.emit((index, ReviewDecision::Approved)))
        };
        let reject = {
            let decide = decide.clone();
            Callback::from(move |_: MouseEvent| decide.emit((index, ReviewDecision::Rejected)))
        };

        let status = match decision {
            ReviewDecision::Pending => html! {
                <div class="review-actions">
                    <button class="btn-approve" onclick={approve}>{"Approve"}</button>
                    <button class="btn-reject" onclick={reject}>{"Reject"}</button>
                </div>
            },
            ReviewDecision::Approved => html! {
                <span class="review-status approved">{"✓ Approved"}</span>
            },
            ReviewDecision::Rejected => html! {
                <span class="review-status rejected">{"✕ Rejected"}</span>
            },
        };

        html! {
            <tr key={index}>
                <td>{seller.display_name.clone()}</td>
                <td>{seller.title.clone()}</td>
                <td>{seller.location.clone()}</td>
                <td>{seller.submitted_on.clone()}</td>
                <td>{status}</td>
            </tr>
        }
    });

    html! {
        <main class="dashboard admin-dashboard">
            <section class="stat-grid">
                <div class="stat-card">
                    <span class="stat-value">{stats.active_sellers}</span>
                    <span class="stat-label">{"Active sellers"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{stats.active_buyers}</span>
                    <span class="stat-label">{"Active buyers"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{stats.open_engagements}</span>
                    <span class="stat-label">{"Open engagements"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{stats.pending_approvals}</span>
                    <span class="stat-label">{"Pending approvals"}</span>
                </div>
            </section>

            <section class="pending-reviews">
                <h2>{"Pending seller reviews"}</h2>
                <table class="review-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Specialty"}</th>
                            <th>{"Location"}</th>
                            <th>{"Submitted"}</th>
                            <th>{"Decision"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows }
                    </tbody>
                </table>
            </section>
        </main>
    }
}
