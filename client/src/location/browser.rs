//! `navigator.geolocation` provider for the hydrated client.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;

use super::capture::{Coordinates, LocationError, LocationOutcome, POSITION_UNAVAILABLE, PositionProvider, RequestOptions};

type Completion = Box<dyn FnOnce(LocationOutcome)>;

/// Position provider backed by the browser Geolocation API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserGeolocation;

impl PositionProvider for BrowserGeolocation {
    fn current_position(&self, options: RequestOptions, on_complete: Completion) {
        let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
            log::warn!("geolocation unavailable in this browser");
            on_complete(Err(LocationError::new(POSITION_UNAVAILABLE, "Geolocation is not supported")));
            return;
        };

        // The platform fires exactly one of the two callbacks.
        let slot: Rc<RefCell<Option<Completion>>> = Rc::new(RefCell::new(Some(on_complete)));

        let on_success = Closure::once_into_js({
            let slot = Rc::clone(&slot);
            move |position: web_sys::GeolocationPosition| {
                let coords = position.coords();
                finish(&slot, Ok(Coordinates { longitude: coords.longitude(), latitude: coords.latitude() }));
            }
        });
        let on_error = Closure::once_into_js({
            let slot = Rc::clone(&slot);
            move |err: web_sys::GeolocationPositionError| {
                let err = LocationError::new(err.code(), err.message());
                log::warn!("geolocation request failed ({:?}): {err}", err.kind());
                finish(&slot, Err(err));
            }
        });

        let position_options = web_sys::PositionOptions::new();
        position_options.set_enable_high_accuracy(options.enable_high_accuracy);

        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
            &position_options,
        ) {
            log::warn!("geolocation request rejected: {e:?}");
            finish(&slot, Err(LocationError::new(POSITION_UNAVAILABLE, "Geolocation request rejected")));
        }
    }
}

fn finish(slot: &Rc<RefCell<Option<Completion>>>, outcome: LocationOutcome) {
    let complete = slot.borrow_mut().take();
    if let Some(complete) = complete {
        complete(outcome);
    }
}
