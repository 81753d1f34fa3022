//! Stripe.js Bindings
//!
//! Thin wasm-bindgen bindings over the browser-side Stripe library. The
//! Payment Element is Stripe-hosted (an iframe); only mounting and
//! confirmation are wrapped here.

use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Publishable key compiled in at build time. `None` degrades the donation
/// page to PIX-only; it is never a startup failure.
pub fn publishable_key() -> Option<&'static str> {
    option_env!("STRIPE_PUBLIC_KEY").filter(|key| !key.is_empty())
}

#[wasm_bindgen]
extern "C" {
    type JsStripe;
    type JsElements;
    type JsPaymentElement;

    #[wasm_bindgen(catch, js_name = Stripe)]
    fn stripe_new(publishable_key: &str) -> Result<JsStripe, JsValue>;

    #[wasm_bindgen(method)]
    fn elements(this: &JsStripe, options: &JsValue) -> JsElements;

    #[wasm_bindgen(method)]
    fn create(this: &JsElements, element_type: &str) -> JsPaymentElement;

    #[wasm_bindgen(method)]
    fn mount(this: &JsPaymentElement, selector: &str);

    #[wasm_bindgen(method, js_name = confirmPayment)]
    fn confirm_payment(this: &JsStripe, options: &JsValue) -> Promise;
}

/// Handle to a loaded Stripe.js instance
#[derive(Clone)]
pub struct StripeHandle {
    inner: JsStripe,
}

/// Element group bound to one payment intent
#[derive(Clone)]
pub struct ElementsHandle {
    inner: JsElements,
}

impl StripeHandle {
    /// `None` when the Stripe.js script is not on the page (blocked or
    /// offline); the caller degrades to the PIX fallback.
    pub fn new(publishable_key: &str) -> Option<Self> {
        stripe_new(publishable_key).ok().map(|inner| Self { inner })
    }

    /// Create the element group for a payment intent's client secret.
    pub fn elements(&self, client_secret: &str) -> ElementsHandle {
        let options = Object::new();
        let _ = Reflect::set(&options, &"clientSecret".into(), &client_secret.into());

        ElementsHandle {
            inner: self.inner.elements(&options),
        }
    }

    /// Confirm the payment. On success the browser is redirected to
    /// `return_url` and this future is never observed; a synchronous
    /// confirmation error resolves with the processor's message.
    pub async fn confirm_payment(
        &self,
        elements: &ElementsHandle,
        return_url: &str,
    ) -> Result<(), String> {
        let confirm_params = Object::new();
        let _ = Reflect::set(&confirm_params, &"return_url".into(), &return_url.into());

        let options = Object::new();
        let _ = Reflect::set(&options, &"elements".into(), elements.inner.as_ref());
        let _ = Reflect::set(&options, &"confirmParams".into(), &confirm_params.into());

        let result = JsFuture::from(self.inner.confirm_payment(&options))
            .await
            .map_err(|_| "Erro no pagamento".to_string())?;

        let error = Reflect::get(&result, &"error".into())
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null());

        match error {
            Some(error) => {
                let message = Reflect::get(&error, &"message".into())
                    .ok()
                    .and_then(|value| value.as_string())
                    .unwrap_or_else(|| "Erro no pagamento".into());
                Err(message)
            }
            None => Ok(()),
        }
    }
}

impl ElementsHandle {
    /// Create and mount the Payment Element into `selector`.
    pub fn mount_payment_element(&self, selector: &str) {
        self.inner.create("payment").mount(selector);
    }
}
