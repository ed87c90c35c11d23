use shared::domain::BillingCycle;

/// Pricing page: billing cycle switch and an accordion with at most one FAQ open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingState {
    cycle: BillingCycle,
    open_faq: Option<usize>,
}

impl Default for PricingState {
    fn default() -> Self {
        Self {
            cycle: BillingCycle::Monthly,
            open_faq: None,
        }
    }
}

impl PricingState {
    pub fn cycle(&self) -> BillingCycle {
        self.cycle
    }

    pub fn set_cycle(&mut self, cycle: BillingCycle) {
        self.cycle = cycle;
    }

    pub fn open_faq(&self) -> Option<usize> {
        self.open_faq
    }

    /// Opens `index`, closing any other; toggling the open one closes it.
    pub fn toggle_faq(&mut self, index: usize) {
        self.open_faq = if self.open_faq == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}
