//! Console driver
//!
//! Runs the filter popover and the draft order page through a `Store`,
//! against an in-memory address update that answers after a configurable
//! latency, and prints what a page would render.

mod config;

use anyhow::Context;
use config::Config;
use dashboard_core::messages::DefaultCatalog;
use dashboard_runtime::Store;
use filter_selection::{
    FilterElement, FilterEnvironment, FilterErrorMessages, FilterMenu, FilterRange, FilterSelectionAction,
    FilterSelectionReducer, FilterSelectionState, FilterSubmitHandler, FilterUpdate, FilterValue,
};
use futures::future::BoxFuture;
use order_addresses::{
    AddressEditAction, AddressEditEnvironment, AddressField, AddressId, AddressInput, AddressInputOption,
    AddressTarget, AddressUpdateMutation, AddressUpdateRequest, Country, CustomerAddress, CustomerAddressBook,
    CustomerChangeAction, MutationOutcome, OrderAddresses, OrderDraftPageAction, OrderDraftPageReducer,
    OrderDraftPageState, OrderError, OrderErrorCode, OrderId, RequiredFieldsValidator, address_dialog_view,
};
use plugin_availability::{Channel, ChannelConfiguration, availability_popup};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Postal code the simulated API refuses.
const REJECTED_POSTAL_CODE: &str = "00000";

/// Prints the filters a page would turn into query parameters.
struct PrintFilters;

impl FilterSubmitHandler for PrintFilters {
    fn filters_submitted(&self, filters: Vec<FilterElement>) {
        match serde_json::to_string_pretty(&filters) {
            Ok(json) => println!("Submitted filters:\n{json}"),
            Err(error) => tracing::error!(%error, "failed to encode submitted filters"),
        }
    }
}

/// Address update answered from memory after a delay.
struct SimulatedAddressUpdate {
    latency: Duration,
}

impl AddressUpdateMutation for SimulatedAddressUpdate {
    fn update_addresses(&self, request: AddressUpdateRequest) -> BoxFuture<'_, MutationOutcome> {
        Box::pin(async move {
            tokio::time::sleep(self.latency).await;
            let mut errors = Vec::new();
            if request.shipping_address.postal_code == REJECTED_POSTAL_CODE {
                errors.push(
                    OrderError::new(OrderErrorCode::Invalid)
                        .with_field("shippingAddress.postalCode")
                        .with_message("Invalid postal code"),
                );
            }
            tracing::info!(order = %request.order_id, rejected = errors.len(), "address update answered");
            Ok(errors)
        })
    }
}

fn filter_menu() -> anyhow::Result<FilterMenu> {
    FilterMenu::new(vec![
        FilterElement::new("query", FilterValue::Text(String::new())),
        FilterElement::new("price", FilterValue::PriceRange(FilterRange::unbounded())),
        FilterElement::new("published", FilterValue::Boolean(None)),
    ])
    .context("building the product filter menu")
}

async fn run_filters() -> anyhow::Result<()> {
    println!("=== Filter popover ===\n");

    let store = Store::new(
        FilterSelectionState::new(filter_menu()?),
        FilterSelectionReducer::new(),
        FilterEnvironment::new(Arc::new(PrintFilters)),
    );
    let messages = FilterErrorMessages::new();

    store.send(FilterSelectionAction::TogglePopover).await?;
    store
        .send(FilterSelectionAction::PropertyChanged {
            name: "price".into(),
            update: FilterUpdate::activate_with(FilterValue::PriceRange(FilterRange::unbounded())),
        })
        .await?;
    store.send(FilterSelectionAction::Submit).await?;

    let errors = store.state(|s| s.errors.clone()).await;
    for label in messages.labels(&errors, &DefaultCatalog) {
        println!("Blocked: {label}");
    }

    store
        .send(FilterSelectionAction::PropertyChanged {
            name: "price".into(),
            update: FilterUpdate::value(FilterValue::PriceRange(FilterRange::new(Some(1_000), Some(5_000)))),
        })
        .await?;
    store
        .send(FilterSelectionAction::PropertyChanged {
            name: "published".into(),
            update: FilterUpdate::activate_with(FilterValue::Boolean(Some(true))),
        })
        .await?;
    let mut handle = store.send(FilterSelectionAction::Submit).await?;
    handle.wait_with_timeout(Duration::from_secs(1)).await?;

    let (open, active) = store.state(|s| (s.popover_open, s.active_count())).await;
    println!("Popover open: {open}, active filters in draft: {active}\n");
    Ok(())
}

fn customer_addresses() -> CustomerAddressBook {
    let home = AddressInput::default()
        .with(AddressField::FirstName, "Ada")
        .with(AddressField::LastName, "Lovelace")
        .with(AddressField::StreetAddress1, "12 St James's Square")
        .with(AddressField::City, "London")
        .with(AddressField::PostalCode, "SW1Y 4JH")
        .with(AddressField::Country, "GB");

    CustomerAddressBook {
        addresses: vec![CustomerAddress {
            id: AddressId::new("addr-home"),
            address: home,
        }],
        default_shipping: None,
        default_billing: Some(AddressId::new("addr-home")),
    }
}

type PageStore = Store<OrderDraftPageState, OrderDraftPageAction, AddressEditEnvironment, OrderDraftPageReducer>;

async fn print_dialog(store: &PageStore, heading: &str) -> anyhow::Result<()> {
    let view = store
        .state(|s| s.address_dialog.as_ref().map(|d| address_dialog_view(d, &DefaultCatalog)))
        .await;
    match view {
        Some(view) => println!("{heading}:\n{}\n", serde_json::to_string_pretty(&view)?),
        None => println!("{heading}: dialog closed\n"),
    }
    Ok(())
}

async fn edit(store: &PageStore, action: AddressEditAction) -> anyhow::Result<()> {
    store.send(OrderDraftPageAction::Addresses(action)).await?;
    Ok(())
}

async fn submit_and_wait(store: &PageStore) -> anyhow::Result<()> {
    let mut handle = store
        .send(OrderDraftPageAction::Addresses(AddressEditAction::Submit))
        .await?;
    handle.wait_with_timeout(Duration::from_secs(10)).await?;
    Ok(())
}

async fn run_address_dialog(config: &Config) -> anyhow::Result<()> {
    println!("=== Draft order addresses ===\n");

    let env = AddressEditEnvironment::new(
        Arc::new(RequiredFieldsValidator),
        Arc::new(SimulatedAddressUpdate {
            latency: config.mutation_latency(),
        }),
    )
    .with_confirm_settle(config.confirm_settle());
    let page = OrderDraftPageState::new(
        OrderId::new("draft-1024"),
        OrderAddresses::default(),
        vec![Country::new("GB", "United Kingdom"), Country::new("PL", "Poland")],
    );
    let store = Store::new(page, OrderDraftPageReducer::new(), env);

    store
        .send(OrderDraftPageAction::CustomerEdited { had_errors: false })
        .await?;
    store
        .send(OrderDraftPageAction::CustomerChangeConfirmed(CustomerChangeAction::ChangeAddress))
        .await?;
    edit(&store, AddressEditAction::CustomerAddressesLoaded(customer_addresses())).await?;

    edit(
        &store,
        AddressEditAction::SetMode {
            target: AddressTarget::Shipping,
            mode: AddressInputOption::NewAddress,
        },
    )
    .await?;
    for (field, value) in [
        (AddressField::StreetAddress1, "ul. Prosta 20"),
        (AddressField::City, "Warszawa"),
        (AddressField::PostalCode, REJECTED_POSTAL_CODE),
    ] {
        edit(
            &store,
            AddressEditAction::EditDraftAddress {
                target: AddressTarget::Shipping,
                field,
                value: value.to_string(),
            },
        )
        .await?;
    }
    submit_and_wait(&store).await?;
    print_dialog(&store, "Missing country").await?;

    edit(
        &store,
        AddressEditAction::SelectCountry {
            target: AddressTarget::Shipping,
            code: "pl".to_string(),
        },
    )
    .await?;
    edit(&store, AddressEditAction::SetBillingSameAsShipping(false)).await?;
    submit_and_wait(&store).await?;
    print_dialog(&store, "Rejected by the server").await?;

    edit(
        &store,
        AddressEditAction::EditDraftAddress {
            target: AddressTarget::Shipping,
            field: AddressField::PostalCode,
            value: "00-120".to_string(),
        },
    )
    .await?;
    submit_and_wait(&store).await?;
    print_dialog(&store, "Accepted").await?;

    let addresses = store.state(|s| s.addresses.clone()).await;
    println!("Order addresses:\n{}\n", serde_json::to_string_pretty(&addresses)?);

    store.shutdown(config.shutdown_timeout()).await?;
    Ok(())
}

fn print_plugin_availability() -> anyhow::Result<()> {
    println!("=== Plugin availability ===\n");

    let configs = [
        ChannelConfiguration::new(Channel::new("default-channel", "Default channel"), true),
        ChannelConfiguration::new(Channel::new("channel-pln", "Channel-PLN"), false),
    ];
    let popup = availability_popup(&configs, &DefaultCatalog);
    println!("{}", serde_json::to_string_pretty(&popup)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
    tracing::debug!(?config, "configuration loaded");

    run_filters().await?;
    run_address_dialog(&config).await?;
    print_plugin_availability()?;

    Ok(())
}
