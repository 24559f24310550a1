//! Builds a budget from the seed in the settings.

use budget::{BudgetError, Category, MoneyCents, ResultBudget, normalize_name};

use crate::settings::{Operation, SeedCategory};

/// Categories in the order they were declared.
#[derive(Debug, Default)]
pub struct Budget {
    categories: Vec<Category>,
}

impl Budget {
    pub fn seed(seeds: &[SeedCategory]) -> ResultBudget<Self> {
        let mut budget = Budget::default();
        for seed in seeds {
            if budget.position(&seed.name).is_ok() {
                return Err(BudgetError::InvalidArgument(format!(
                    "duplicate category: {}",
                    seed.name
                )));
            }
            let mut category = Category::new(&seed.name);
            if let Some(amount) = &seed.deposit {
                category.deposit(amount.parse()?, "initial deposit");
            }
            budget.categories.push(category);
        }
        Ok(budget)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn position(&self, name: &str) -> ResultBudget<usize> {
        let wanted = normalize_name(name);
        self.categories
            .iter()
            .position(|category| category.normalized_name() == wanted)
            .ok_or_else(|| BudgetError::InvalidArgument(format!("unknown category: {name}")))
    }

    /// Applies one operation.
    ///
    /// Returns `Ok(false)` when the source category cannot cover the amount;
    /// unknown categories and bad amounts are errors.
    pub fn apply(&mut self, operation: &Operation) -> ResultBudget<bool> {
        match operation {
            Operation::Deposit {
                category,
                amount,
                description,
            } => {
                let amount: MoneyCents = amount.parse()?;
                let index = self.position(category)?;
                self.categories[index].deposit(amount, description.as_str());
                Ok(true)
            }
            Operation::Withdraw {
                category,
                amount,
                description,
            } => {
                let amount: MoneyCents = amount.parse()?;
                let index = self.position(category)?;
                Ok(self.categories[index].withdraw(amount, description.as_str()))
            }
            Operation::Transfer {
                category,
                to,
                amount,
            } => {
                let amount: MoneyCents = amount.parse()?;
                let from = self.position(category)?;
                let to = self.position(to)?;
                let [source, destination] =
                    self.categories.get_disjoint_mut([from, to]).map_err(|_| {
                        BudgetError::InvalidArgument(format!(
                            "cannot transfer from {category} to itself"
                        ))
                    })?;
                Ok(source.transfer(amount, destination))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(name: &str, deposit: Option<&str>) -> SeedCategory {
        SeedCategory {
            name: name.to_string(),
            deposit: deposit.map(str::to_string),
        }
    }

    fn budget() -> Budget {
        Budget::seed(&[seed("Food", Some("100")), seed("Clothing", None)]).unwrap()
    }

    #[test]
    fn seed_deposits_opening_balance() {
        let budget = budget();

        assert_eq!(budget.categories().len(), 2);
        assert_eq!(
            budget.categories()[0].get_balance(),
            MoneyCents::new(100_00)
        );
        assert_eq!(budget.categories()[0].ledger()[0].description(), "initial deposit");
        assert!(budget.categories()[1].ledger().is_empty());
    }

    #[test]
    fn lookup_matches_composed_and_decomposed_names() {
        let mut budget = Budget::seed(&[seed("Caff\u{00e8}", None)]).unwrap();
        let deposit = Operation::Deposit {
            category: "Caffe\u{0300}".to_string(),
            amount: "2".to_string(),
            description: String::new(),
        };

        assert!(budget.apply(&deposit).unwrap());
        assert_eq!(budget.categories()[0].get_balance(), MoneyCents::new(2_00));
        assert!(Budget::seed(&[seed("Caff\u{00e8}", None), seed("Caffe\u{0300}", None)]).is_err());
    }

    #[test]
    fn seed_rejects_duplicates_and_bad_amounts() {
        assert!(Budget::seed(&[seed("Food", None), seed("Food", None)]).is_err());
        assert!(matches!(
            Budget::seed(&[seed("Food", Some("1.001"))]),
            Err(BudgetError::InvalidAmount(_))
        ));
    }

    #[test]
    fn applies_operations() {
        let mut budget = budget();

        let withdraw = Operation::Withdraw {
            category: "Food".to_string(),
            amount: "10.15".to_string(),
            description: "groceries".to_string(),
        };
        let transfer = Operation::Transfer {
            category: "Food".to_string(),
            to: "Clothing".to_string(),
            amount: "50".to_string(),
        };
        assert!(budget.apply(&withdraw).unwrap());
        assert!(budget.apply(&transfer).unwrap());

        assert_eq!(budget.categories()[0].get_balance(), MoneyCents::new(39_85));
        assert_eq!(budget.categories()[1].get_balance(), MoneyCents::new(50_00));
    }

    #[test]
    fn refused_operation_is_not_an_error() {
        let mut budget = budget();
        let transfer = Operation::Transfer {
            category: "Clothing".to_string(),
            to: "Food".to_string(),
            amount: "1".to_string(),
        };

        assert!(!budget.apply(&transfer).unwrap());
    }

    #[test]
    fn unknown_or_self_targets_are_errors() {
        let mut budget = budget();
        let unknown = Operation::Deposit {
            category: "Rent".to_string(),
            amount: "1".to_string(),
            description: String::new(),
        };
        let to_self = Operation::Transfer {
            category: "Food".to_string(),
            to: "Food".to_string(),
            amount: "1".to_string(),
        };

        assert!(matches!(
            budget.apply(&unknown),
            Err(BudgetError::InvalidArgument(_))
        ));
        assert!(matches!(
            budget.apply(&to_self),
            Err(BudgetError::InvalidArgument(_))
        ));
    }
}
