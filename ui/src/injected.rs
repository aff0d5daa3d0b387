//=============================================================================
// File: src/injected.rs
//=============================================================================

// The browser injects the wallet as a global object. Anywhere else there is
// nothing to inject, so connecting always reports a missing provider.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use self::fallback::*;

use api::wallet::WalletConnector;

/// Builds a connector around whatever wallet the page was given.
pub fn connector(provider_key: &str) -> WalletConnector<InjectedProvider> {
    WalletConnector::new(InjectedProvider::detect(provider_key))
}

/// # WebAssembly (WASM) Implementation
/// Talks to the EIP-1193 object through `js_sys::Reflect`.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use api::wallet::{ProviderError, WalletProvider};
    use async_trait::async_trait;
    use js_sys::{Array, Function, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    pub struct InjectedProvider {
        object: Object,
    }

    impl InjectedProvider {
        /// Looks up `window[key]`. Absence is known without asking the user.
        pub fn detect(key: &str) -> Option<Self> {
            let window = web_sys::window()?;
            let value = Reflect::get(&window, &JsValue::from_str(key)).ok()?;
            if value.is_undefined() || value.is_null() {
                return None;
            }
            value.dyn_into::<Object>().ok().map(|object| Self { object })
        }

        fn request_fn(&self) -> Result<Function, ProviderError> {
            Reflect::get(&self.object, &JsValue::from_str("request"))
                .ok()
                .and_then(|f| f.dyn_into::<Function>().ok())
                .ok_or_else(|| ProviderError::new(None, "provider has no request() method"))
        }
    }

    #[async_trait(?Send)]
    impl WalletProvider for InjectedProvider {
        async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
            let args = Object::new();
            Reflect::set(
                &args,
                &JsValue::from_str("method"),
                &JsValue::from_str("eth_requestAccounts"),
            )
            .map_err(provider_error)?;

            let result = self
                .request_fn()?
                .call1(&self.object, &args)
                .map_err(provider_error)?;
            let promise = result
                .dyn_into::<Promise>()
                .map_err(|_| ProviderError::new(None, "request() did not return a promise"))?;
            let accounts = JsFuture::from(promise).await.map_err(provider_error)?;

            let accounts = accounts
                .dyn_into::<Array>()
                .map_err(|_| ProviderError::new(None, "accounts response is not an array"))?;
            accounts
                .iter()
                .map(|a| {
                    a.as_string()
                        .ok_or_else(|| ProviderError::new(None, "account is not a string"))
                })
                .collect()
        }
    }

    /// Reads `{ code, message }` off a rejected request.
    fn provider_error(value: JsValue) -> ProviderError {
        let code = Reflect::get(&value, &JsValue::from_str("code"))
            .ok()
            .and_then(|c| c.as_f64())
            .map(|c| c as i64);
        let message = Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{value:?}"));
        ProviderError::new(code, message)
    }
}

/// # Fallback Implementation
/// No injected wallet exists outside the browser.
#[cfg(not(target_arch = "wasm32"))]
mod fallback {
    use api::wallet::{ProviderError, WalletProvider};
    use async_trait::async_trait;

    pub enum InjectedProvider {}

    impl InjectedProvider {
        pub fn detect(_key: &str) -> Option<Self> {
            None
        }
    }

    #[async_trait(?Send)]
    impl WalletProvider for InjectedProvider {
        async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
            match *self {}
        }
    }
}
