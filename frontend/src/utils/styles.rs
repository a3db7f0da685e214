use crate::error::FrontendError;
use crate::utils::dom;

pub const MODAL_STYLE_ID: &str = "modal-styles";
pub const NOTIFICATION_STYLE_ID: &str = "notification-styles";
pub const SCROLL_REVEAL_STYLE_ID: &str = "scroll-reveal-styles";

/// Appends a `<style id={id}>` to `<head>` once; later calls are no-ops.
pub fn ensure_stylesheet(id: &str, css: &str) -> Result<(), FrontendError> {
    let document = dom::document()?;
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    document
        .head()
        .ok_or(FrontendError::UnexpectedElement("a <head> element"))?
        .append_child(&style)?;
    Ok(())
}

pub const MODAL_CSS: &str = r#"
    .modal-overlay {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        bottom: 0;
        background-color: rgba(0, 0, 0, 0.7);
        display: flex;
        justify-content: center;
        align-items: center;
        z-index: 2000;
        padding: 20px;
    }
    .modal-content {
        background-color: white;
        border-radius: 10px;
        max-width: 500px;
        width: 100%;
        max-height: 90vh;
        overflow-y: auto;
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
    }
    .modal-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 20px;
        border-bottom: 1px solid var(--border);
    }
    .modal-header h3 {
        margin: 0;
        color: var(--secondary);
    }
    .modal-close {
        background: none;
        border: none;
        font-size: 28px;
        cursor: pointer;
        color: var(--gray);
        line-height: 1;
    }
    .modal-body {
        padding: 20px;
    }
    .modal-price {
        font-size: 24px;
        font-weight: bold;
        color: var(--primary);
        margin-bottom: 15px;
    }
    .payment-number-modal {
        display: flex;
        align-items: center;
        gap: 10px;
        margin: 15px 0;
        background-color: #f1fdf7;
        padding: 15px;
        border-radius: 8px;
    }
    .payment-number-modal .number {
        flex: 1;
        font-size: 20px;
        font-weight: bold;
        color: var(--primary);
    }
    .form-group {
        margin-bottom: 20px;
    }
    .form-group label {
        display: block;
        margin-bottom: 8px;
        font-weight: 500;
        color: var(--dark);
    }
    .form-group input {
        width: 100%;
        padding: 12px 15px;
        border: 1px solid var(--border);
        border-radius: 5px;
        font-size: 16px;
    }
    .form-group input:focus {
        outline: none;
        border-color: var(--primary);
    }
    .modal-switch {
        text-align: center;
        margin-top: 15px;
    }
"#;

pub const NOTIFICATION_CSS: &str = r#"
    .notification {
        position: fixed;
        top: 20px;
        right: 20px;
        padding: 15px 20px;
        border-radius: 5px;
        color: white;
        font-weight: 500;
        z-index: 3000;
        box-shadow: 0 5px 15px rgba(0,0,0,0.2);
        animation: slideIn 0.3s ease, fadeOut 0.3s ease 2.7s;
        max-width: 350px;
    }
    .notification-success {
        background-color: var(--primary);
    }
    .notification-warning {
        background-color: #ff9800;
    }
    .notification-info {
        background-color: #2196f3;
    }
    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes fadeOut {
        from { opacity: 1; }
        to { opacity: 0; }
    }
"#;

pub const SCROLL_REVEAL_CSS: &str = r#"
    .service-card {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.5s ease, transform 0.5s ease;
    }
    .service-card.animate-in {
        opacity: 1;
        transform: translateY(0);
    }
"#;
