use crate::domain::a100_validation_bc::filters::{persist_state, BcFilterState, BcSortField};
use leptos::prelude::*;
use thaw::*;

fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| *v > 0.0)
}

#[component]
pub fn BcFilterBar() -> impl IntoView {
    let state = use_context::<RwSignal<BcFilterState>>().expect("BcFilterState not provided");
    let initial = state.get_untracked();

    let search = RwSignal::new(initial.search.clone());
    let min_amount = RwSignal::new(
        initial
            .min_amount
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let sort_by = RwSignal::new(initial.sort_by.code().to_string());

    Effect::new(move |_| {
        let v = search.get();
        state.update(|s| s.search = v);
        persist_state(state);
    });

    Effect::new(move |_| {
        let v = parse_amount(&min_amount.get());
        state.update(|s| s.min_amount = v);
        persist_state(state);
    });

    Effect::new(move |_| {
        let v = BcSortField::from_code(&sort_by.get());
        state.update(|s| s.sort_by = v);
        persist_state(state);
    });

    let toggle_direction = move |_| {
        state.update(|s| s.sort_ascending = !s.sort_ascending);
        persist_state(state);
    };

    let reset = move |_| {
        search.set(String::new());
        min_amount.set(String::new());
        sort_by.set(BcSortField::default().code().to_string());
        state.set(BcFilterState::default());
        persist_state(state);
    };

    view! {
        <div class="filter-panel">
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="width: 240px;">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Recherche :"</Label>
                        <Input value=search placeholder="Référence, fournisseur, chantier..." />
                    </Flex>
                </div>
                <div style="width: 140px;">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Montant min. :"</Label>
                        <Input value=min_amount placeholder="0" />
                    </Flex>
                </div>
                <div style="width: 180px;">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Trier par :"</Label>
                        <Select value=sort_by>
                            <option value="issuedOn">"Date d'émission"</option>
                            <option value="amount">"Montant"</option>
                            <option value="supplier">"Fournisseur"</option>
                        </Select>
                    </Flex>
                </div>
                <Button appearance=ButtonAppearance::Subtle on_click=toggle_direction>
                    {move || if state.get().sort_ascending { "↑ Croissant" } else { "↓ Décroissant" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=reset>
                    "Réinitialiser"
                </Button>
                {move || {
                    let count = state.get().active_count();
                    (count > 0).then(|| view! {
                        <span class="filter-panel__badge">{count}</span>
                    })
                }}
            </Flex>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1 500,50"), Some(1500.5));
        assert_eq!(parse_amount("2000"), Some(2000.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("0"), None);
    }
}
