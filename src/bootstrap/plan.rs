use crate::bootstrap::probe::ProbeReport;

/// One seeding step the sequencer should run. Ordering within the returned
/// plan matters only for the ChartOfAccounts → EntryParams pair; the other
/// actions are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedAction {
    ChartOfAccounts,
    EntryParams,
    WeeklySavings,
    SignatureParams,
    SuperuserAccount,
}

/// Pure decision function: probe snapshot in, ordered actions out.
pub fn plan(report: &ProbeReport) -> Vec<SeedAction> {
    let mut actions = Vec::new();

    if report.chart_of_accounts < 1 {
        // Entry params derive from chart-of-accounts content, so they are
        // queued directly behind it whenever the chart itself is due.
        actions.push(SeedAction::ChartOfAccounts);
        actions.push(SeedAction::EntryParams);
    } else if report.entry_params < 1 {
        actions.push(SeedAction::EntryParams);
    }

    if report.weekly_savings < 1 {
        actions.push(SeedAction::WeeklySavings);
    }
    if report.signature_params < 1 {
        actions.push(SeedAction::SignatureParams);
    }
    if !report.live_superuser {
        actions.push(SeedAction::SuperuserAccount);
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fully_seeded() -> ProbeReport {
        ProbeReport {
            chart_of_accounts: 120,
            weekly_savings: 14,
            entry_params: 8,
            signature_params: 8,
            live_superuser: true,
        }
    }

    #[test]
    fn fully_seeded_store_plans_nothing() {
        assert!(plan(&fully_seeded()).is_empty());
    }

    #[test]
    fn empty_store_plans_everything_with_chart_before_entry_params() {
        let report = ProbeReport {
            chart_of_accounts: 0,
            weekly_savings: 0,
            entry_params: 0,
            signature_params: 0,
            live_superuser: false,
        };

        let actions = plan(&report);
        assert_eq!(
            actions,
            vec![
                SeedAction::ChartOfAccounts,
                SeedAction::EntryParams,
                SeedAction::WeeklySavings,
                SeedAction::SignatureParams,
                SeedAction::SuperuserAccount,
            ]
        );

        let chart = actions
            .iter()
            .position(|a| *a == SeedAction::ChartOfAccounts)
            .unwrap();
        let entry = actions
            .iter()
            .position(|a| *a == SeedAction::EntryParams)
            .unwrap();
        assert!(chart < entry);
    }

    #[test]
    fn populated_chart_with_missing_entry_params_plans_entry_params_only() {
        let report = ProbeReport {
            entry_params: 0,
            ..fully_seeded()
        };
        assert_eq!(plan(&report), vec![SeedAction::EntryParams]);
    }

    #[test]
    fn chart_due_queues_entry_params_even_when_they_already_exist() {
        // Count < 1 on the chart always queues the derived pair; the
        // decision table keys entry params off the chart condition first.
        let report = ProbeReport {
            chart_of_accounts: 0,
            ..fully_seeded()
        };
        assert_eq!(
            plan(&report),
            vec![SeedAction::ChartOfAccounts, SeedAction::EntryParams]
        );
    }

    #[test]
    fn missing_superuser_plans_account_creation() {
        let report = ProbeReport {
            live_superuser: false,
            ..fully_seeded()
        };
        assert_eq!(plan(&report), vec![SeedAction::SuperuserAccount]);
    }

    #[test]
    fn independent_datasets_plan_independently() {
        let report = ProbeReport {
            weekly_savings: 0,
            signature_params: 0,
            ..fully_seeded()
        };
        assert_eq!(
            plan(&report),
            vec![SeedAction::WeeklySavings, SeedAction::SignatureParams]
        );
    }
}
