// core/tests/config_integration.rs
//
// Configuration flowing from TOML into a running autocomplete box.

mod common;

use autocomplete_core::{AutocompleteBox, Config, SearchMode, MAX_SUGGESTIONS};
use common::{ms, type_text, TestDisplay, TestField, COUNTRIES};
use tokio::task::LocalSet;

#[tokio::test(start_paused = true)]
async fn test_config_from_toml_drives_the_box() {
    LocalSet::new()
        .run_until(async {
            let cfg = Config::from_toml_str(
                "search_mode = \"starts_with\"\npopup_delay = 0.1\nmax_cache_size = 4\n",
            )
            .unwrap();
            let ac = AutocompleteBox::with_config(
                TestField::new(),
                TestDisplay::new(),
                COUNTRIES.iter().copied(),
                &cfg,
            );
            assert_eq!(ac.search_mode(), SearchMode::StartsWith);
            assert_eq!(ac.popup_delay(), 0.1);

            type_text(&ac, "a", ms(150)).await;
            assert_eq!(
                ac.display().labels(),
                vec!["Afghanistan", "Algeria", "American Samoa"]
            );
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_apply_config_updates_mode_and_delay() {
    LocalSet::new()
        .run_until(async {
            let ac = AutocompleteBox::with_items(
                TestField::new(),
                TestDisplay::new(),
                COUNTRIES.iter().copied(),
            );
            let mut cfg = Config::default();
            cfg.set_search_mode(SearchMode::StartsWith);
            cfg.popup_delay = 7.0;
            ac.apply_config(&cfg);
            assert_eq!(ac.search_mode(), SearchMode::StartsWith);
            // Invalid delay in the config is rejected by the box as well
            assert_eq!(ac.popup_delay(), 0.3);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_repeated_queries_hit_the_cache() {
    LocalSet::new()
        .run_until(async {
            let ac = AutocompleteBox::with_items(
                TestField::new(),
                TestDisplay::new(),
                COUNTRIES.iter().copied(),
            );
            type_text(&ac, "a", ms(400)).await;
            assert_eq!(ac.display().labels().len(), MAX_SUGGESTIONS);

            // Same query again (case differs, folded key is the same)
            ac.field().type_over("A");
            ac.on_key_up(autocomplete_core::KeyEvent::Char('A'));
            tokio::time::sleep(ms(400)).await;
            assert_eq!(ac.cache_stats(), (1, 1));
            assert_eq!(ac.display().show_count(), 2);

            ac.replace_items(["Andorra"]);
            assert_eq!(ac.cache_stats(), (0, 0));
        })
        .await;
}
