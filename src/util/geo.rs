//! Browser geolocation access for the SOS trigger and the location page.
//!
//! ERROR HANDLING
//! ==============
//! Callers receive either a coordinate snapshot or a display-ready message;
//! a device without geolocation is reported through the error callback, not
//! a panic. Outside the browser every entry point degrades to "unsupported".

/// One position fix handed to callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Fix accuracy in meters.
    pub accuracy: f64,
    pub altitude: Option<f64>,
    pub heading: Option<f64>,
    pub speed: Option<f64>,
}

/// Whether this device exposes geolocation at all.
pub fn supported() -> bool {
    #[cfg(feature = "csr")]
    {
        geolocation().is_some()
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Request a single position fix. Exactly one of the callbacks fires.
pub fn current_position(
    on_success: impl Fn(GeoPoint) + 'static,
    on_error: impl Fn(String) + 'static,
) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(geo) = geolocation() else {
            on_error("Geolocation is not supported by this browser".to_owned());
            return;
        };
        let success = Closure::wrap(Box::new(move |position: web_sys::Position| {
            on_success(point_from(&position));
        }) as Box<dyn FnMut(web_sys::Position)>);
        let failure = Closure::wrap(Box::new(move |err: web_sys::PositionError| {
            on_error(err.message());
        }) as Box<dyn FnMut(web_sys::PositionError)>);

        let result = geo.get_current_position_with_error_callback_and_options(
            success.as_ref().unchecked_ref(),
            Some(failure.as_ref().unchecked_ref()),
            &fix_options(),
        );
        if result.is_ok() {
            // The browser owns the callbacks from here on.
            success.forget();
            failure.forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_success;
        on_error("Geolocation is not supported by this browser".to_owned());
    }
}

/// Start a continuous watch. Returns the watch id to pass to `clear_watch`,
/// or `None` when geolocation is unavailable (reported via `on_error`).
pub fn watch_position(
    on_sample: impl Fn(GeoPoint) + 'static,
    on_error: impl Fn(String) + 'static,
) -> Option<i32> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(geo) = geolocation() else {
            on_error("Geolocation is not supported by this browser".to_owned());
            return None;
        };
        let success = Closure::wrap(Box::new(move |position: web_sys::Position| {
            on_sample(point_from(&position));
        }) as Box<dyn FnMut(web_sys::Position)>);
        let failure = Closure::wrap(Box::new(move |err: web_sys::PositionError| {
            on_error(err.message());
        }) as Box<dyn FnMut(web_sys::PositionError)>);

        let watch_id = geo
            .watch_position_with_error_callback_and_options(
                success.as_ref().unchecked_ref(),
                Some(failure.as_ref().unchecked_ref()),
                &fix_options(),
            )
            .ok();
        if watch_id.is_some() {
            success.forget();
            failure.forget();
        }
        watch_id
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_sample;
        on_error("Geolocation is not supported by this browser".to_owned());
        None
    }
}

/// Stop a watch started with `watch_position`. Safe to call with a watch id
/// that was already cleared.
pub fn clear_watch(watch_id: i32) {
    #[cfg(feature = "csr")]
    {
        if let Some(geo) = geolocation() {
            geo.clear_watch(watch_id);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = watch_id;
    }
}

#[cfg(feature = "csr")]
fn geolocation() -> Option<web_sys::Geolocation> {
    web_sys::window()?.navigator().geolocation().ok()
}

#[cfg(feature = "csr")]
fn fix_options() -> web_sys::PositionOptions {
    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(10_000);
    options.set_maximum_age(60_000);
    options
}

#[cfg(feature = "csr")]
fn point_from(position: &web_sys::Position) -> GeoPoint {
    let coords = position.coords();
    GeoPoint {
        latitude: coords.latitude(),
        longitude: coords.longitude(),
        accuracy: coords.accuracy(),
        altitude: coords.altitude(),
        heading: coords.heading(),
        speed: coords.speed(),
    }
}
