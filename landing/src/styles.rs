//! Stylesheet for the landing page.
//!
//! Injected as a `<style>` element by [`crate::App`], so the CSR build and the
//! prerendered document share one source. Entrance animations are driven by
//! inline styles from [`crate::motion::presets`]; this sheet carries layout,
//! colour and the looping keyframe animations.
//!
//! The sheet must not contain `<`, `>` or `&`: server rendering escapes text
//! children, which would corrupt selectors inside `<style>`.

/// Complete CSS for the page - deep violet gradient theme.
pub const LANDING_CSS: &str = r#"
:root {
    --ara-indigo: #667eea;
    --ara-violet: #764ba2;
    --ara-gradient: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    --ara-title-gradient: linear-gradient(135deg, #ffffff 0%, #667eea 100%);
    --ara-glass: rgba(255, 255, 255, 0.1);
    --ara-glass-border: rgba(255, 255, 255, 0.2);
    --ara-success: #22c55e;
    --ara-error: #f87171;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: #ffffff;
    background: #000000;
    overflow-x: hidden;
}

h1, h2, h3, h4, h5, h6 {
    font-weight: 700;
    line-height: 1.2;
}

p {
    font-weight: 400;
    opacity: 0.9;
}

button {
    cursor: pointer;
    border: none;
    outline: none;
    font-family: inherit;
}

input {
    font-family: inherit;
    outline: none;
}

a {
    text-decoration: none;
    color: inherit;
}

::-webkit-scrollbar { width: 8px; }
::-webkit-scrollbar-track { background: rgba(255, 255, 255, 0.1); }
::-webkit-scrollbar-thumb { background: rgba(255, 255, 255, 0.3); border-radius: 4px; }
::-webkit-scrollbar-thumb:hover { background: rgba(255, 255, 255, 0.5); }

.gradient-text {
    background: var(--ara-title-gradient);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
}

.reveal {
    will-change: opacity, transform, filter;
}

/* ===== Page + backdrop ===== */

.page {
    position: relative;
    overflow-x: hidden;
}

.backdrop,
.backdrop-overlay {
    position: fixed;
    inset: 0;
    pointer-events: none;
}

.backdrop {
    background: var(--ara-gradient);
    z-index: -2;
}

.backdrop-overlay {
    background: radial-gradient(circle at 50% 50%, rgba(0, 0, 0, 0.3) 0%, rgba(0, 0, 0, 0.8) 100%);
    z-index: -1;
    animation: breathe 8s ease-in-out infinite;
}

@keyframes breathe {
    0%, 100% { opacity: 0.3; }
    50% { opacity: 0.6; }
}

/* ===== Hero ===== */

.hero {
    height: 100vh;
    position: relative;
    overflow: hidden;
    padding: 0 2rem;
    perspective: 1000px;
}

.hero-stage {
    height: 100%;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    text-align: center;
}

.floating-elements {
    position: absolute;
    inset: 0;
    pointer-events: none;
}

.floating-circle {
    position: absolute;
    border-radius: 50%;
    background: rgba(102, 126, 234, 0.1);
    animation-name: float;
    animation-timing-function: ease-in-out;
    animation-iteration-count: infinite;
}

@keyframes float {
    0%, 100% { transform: translate(0, 0); opacity: 0.1; }
    50% { transform: translate(var(--drift-x, 0px), -30px); opacity: 0.3; }
}

.hero-product-tilt {
    margin-bottom: 3rem;
    transform-style: preserve-3d;
}

.hero-product {
    width: 300px;
    height: 300px;
    background-position: center;
    background-size: cover;
    border-radius: 20px;
    box-shadow: 0 20px 60px rgba(102, 126, 234, 0.4);
}

.hero-title {
    font-size: clamp(3rem, 8vw, 6rem);
    font-weight: 900;
    margin-bottom: 1.5rem;
    background: linear-gradient(135deg, #ffffff 0%, #667eea 50%, #764ba2 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
}

.hero-subtitle {
    font-size: clamp(1.2rem, 3vw, 1.8rem);
    margin-bottom: 3rem;
    max-width: 600px;
    opacity: 0.8;
    font-weight: 300;
}

.cta-button {
    display: inline-block;
    background: var(--ara-gradient);
    color: white;
    padding: 1.2rem 3rem;
    border-radius: 50px;
    font-size: 1.1rem;
    font-weight: 600;
    position: relative;
    overflow: hidden;
}

.cta-button::before,
.submit-button::before {
    content: '';
    position: absolute;
    top: 0;
    left: -100%;
    width: 100%;
    height: 100%;
    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
    transition: left 0.5s;
}

.cta-button:hover::before,
.submit-button:hover::before {
    left: 100%;
}

.cta-button:hover {
    box-shadow: 0 10px 30px rgba(102, 126, 234, 0.4);
}

/* ===== Highlights ===== */

.highlights {
    padding: 8rem 2rem;
    max-width: 1200px;
    margin: 0 auto;
}

.highlight {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    margin-bottom: 8rem;
    align-items: center;
    perspective: 1000px;
}

.highlight.reverse .highlight-image {
    order: 2;
}

.highlight-image {
    border-radius: 20px;
    overflow: hidden;
    aspect-ratio: 4 / 3;
    background-position: center;
    background-size: cover;
    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
}

.highlight-copy {
    padding: 2rem 0;
}

.highlight-title {
    font-size: clamp(2rem, 5vw, 3rem);
    margin-bottom: 1.5rem;
}

.highlight-description {
    font-size: 1.2rem;
    line-height: 1.8;
    margin-bottom: 2rem;
    opacity: 0.8;
}

.feature-list {
    list-style: none;
}

.feature-item {
    display: flex;
    align-items: center;
    margin-bottom: 1rem;
    font-size: 1.1rem;
}

.feature-item::before {
    content: '✦';
    color: var(--ara-indigo);
    font-size: 1.2rem;
    margin-right: 1rem;
}

/* ===== Module showcase ===== */

.showcase {
    padding: 8rem 2rem;
    background: rgba(0, 0, 0, 0.8);
    backdrop-filter: blur(20px);
    text-align: center;
}

.section-title {
    font-size: clamp(2.5rem, 6vw, 4rem);
    margin-bottom: 2rem;
}

.section-subtitle {
    font-size: 1.3rem;
    margin: 0 auto 4rem;
    opacity: 0.8;
    max-width: 600px;
}

.phone-stage {
    position: relative;
    max-width: 400px;
    height: 600px;
    margin: 0 auto 4rem;
    display: flex;
    align-items: center;
    justify-content: center;
}

.phone {
    width: 200px;
    height: 400px;
    background: linear-gradient(135deg, #1a1a1a 0%, #2d2d2d 100%);
    border-radius: 25px;
    position: relative;
    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);
    border: 2px solid rgba(255, 255, 255, 0.1);
}

.module-slot {
    position: absolute;
}

.slot-top { top: -30px; left: 50%; transform: translateX(-50%); }
.slot-right { right: -30px; top: 50%; transform: translateY(-50%); }
.slot-bottom { bottom: -30px; left: 50%; transform: translateX(-50%); }
.slot-left { left: -30px; top: 50%; transform: translateY(-50%); }

.module-button {
    width: 60px;
    height: 60px;
    border: 2px solid rgba(255, 255, 255, 0.3);
    border-radius: 8px;
    background: var(--ara-glass);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    color: inherit;
}

.module-button:hover {
    border-color: var(--ara-indigo);
    background: rgba(102, 126, 234, 0.3);
}

.module-button.active {
    border-color: var(--ara-indigo);
    background: rgba(102, 126, 234, 0.2);
}

.module-info {
    background: var(--ara-glass);
    backdrop-filter: blur(20px);
    border: 1px solid var(--ara-glass-border);
    border-radius: 15px;
    padding: 2rem;
    max-width: 400px;
    margin: 0 auto;
    text-align: left;
}

.module-name {
    font-size: 1.5rem;
    margin-bottom: 1rem;
    color: var(--ara-indigo);
}

.module-description {
    font-size: 1.1rem;
    margin-bottom: 1rem;
}

.module-specs {
    list-style: none;
}

.module-specs li {
    padding: 0.3rem 0;
    font-size: 0.9rem;
    opacity: 0.8;
}

.module-specs li::before {
    content: '•';
    color: var(--ara-indigo);
    margin-right: 0.5rem;
}

/* ===== Testimonials ===== */

.testimonials {
    padding: 8rem 2rem;
    text-align: center;
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(10px);
}

.testimonials .section-title {
    margin-bottom: 4rem;
}

.carousel {
    position: relative;
    max-width: 800px;
    height: 400px;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: center;
    perspective: 1200px;
}

.testimonial-card {
    position: absolute;
    background: var(--ara-glass);
    backdrop-filter: blur(20px);
    border: 1px solid var(--ara-glass-border);
    border-radius: 20px;
    padding: 3rem;
    max-width: 600px;
    width: 100%;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
    animation-duration: 0.8s;
    animation-timing-function: cubic-bezier(0.22, 1, 0.36, 1);
    animation-fill-mode: both;
}

.testimonial-card:hover {
    transform: scale(1.02);
    box-shadow: 0 20px 60px rgba(102, 126, 234, 0.2);
}

.testimonial-card.slide-forward { animation-name: slide-forward; }
.testimonial-card.slide-backward { animation-name: slide-backward; }

@keyframes slide-forward {
    from { opacity: 0; transform: translateX(100vw) scale(0.8) rotateY(45deg); }
    to { opacity: 1; transform: none; }
}

@keyframes slide-backward {
    from { opacity: 0; transform: translateX(-100vw) scale(0.8) rotateY(-45deg); }
    to { opacity: 1; transform: none; }
}

.testimonial-text {
    font-size: 1.3rem;
    margin-bottom: 2rem;
    font-style: italic;
}

.testimonial-author {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}

.author-avatar {
    width: 60px;
    height: 60px;
    border-radius: 50%;
    background: var(--ara-gradient);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    font-weight: bold;
}

.author-info { text-align: left; }
.author-name { font-size: 1.1rem; margin-bottom: 0.2rem; }
.author-title { font-size: 0.9rem; opacity: 0.7; }

.carousel-dots {
    display: flex;
    justify-content: center;
    gap: 1rem;
    margin-top: 3rem;
}

.dot {
    width: 12px;
    height: 12px;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.3);
    transition: all 0.3s ease;
}

.dot.active,
.dot:hover {
    background: var(--ara-indigo);
}

.dot:hover {
    transform: scale(1.2);
}

/* ===== Waitlist ===== */

.waitlist {
    padding: 8rem 2rem;
    text-align: center;
    max-width: 600px;
    margin: 0 auto;
}

.waitlist .section-title {
    margin-bottom: 1.5rem;
}

.waitlist-subtitle {
    font-size: 1.3rem;
    margin-bottom: 3rem;
    opacity: 0.8;
}

.waitlist-form {
    display: flex;
    gap: 1rem;
    margin-bottom: 2rem;
}

.email-input {
    flex: 1;
    padding: 1.2rem 1.5rem;
    border: 2px solid var(--ara-glass-border);
    border-radius: 50px;
    background: var(--ara-glass);
    backdrop-filter: blur(10px);
    color: white;
    font-size: 1.1rem;
    transition: all 0.3s ease;
}

.email-input::placeholder { color: rgba(255, 255, 255, 0.6); }

.email-input:focus {
    border-color: var(--ara-indigo);
    background: rgba(255, 255, 255, 0.15);
    box-shadow: 0 0 20px rgba(102, 126, 234, 0.3);
    transform: scale(1.02);
}

.submit-button {
    padding: 1.2rem 2.5rem;
    background: var(--ara-gradient);
    color: white;
    border-radius: 50px;
    font-size: 1.1rem;
    font-weight: 600;
    position: relative;
    overflow: hidden;
    white-space: nowrap;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.submit-button:hover { transform: scale(1.05); box-shadow: 0 10px 30px rgba(102, 126, 234, 0.4); }
.submit-button:active { transform: scale(0.95); }
.submit-button:disabled { cursor: progress; transform: none; }

.spinner {
    display: inline-block;
    animation: spin 1s linear infinite;
}

@keyframes spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

.privacy-note {
    font-size: 0.9rem;
    opacity: 0.6;
    margin-top: 1rem;
    line-height: 1.5;
}

.success-message {
    background: rgba(34, 197, 94, 0.2);
    border: 1px solid rgba(34, 197, 94, 0.3);
    border-radius: 15px;
    padding: 1.5rem;
    margin-top: 2rem;
    color: var(--ara-success);
    font-weight: 500;
}

.error-message {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    color: var(--ara-error);
    margin-bottom: 1rem;
}

.retry-button {
    background: none;
    color: white;
    text-decoration: underline;
    font-size: 1rem;
}

/* ===== Footer ===== */

.footer {
    padding: 4rem 2rem 2rem;
    text-align: center;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(0, 0, 0, 0.8);
    backdrop-filter: blur(20px);
}

.footer-content {
    max-width: 1200px;
    margin: 0 auto;
}

.company-name {
    font-size: 1.5rem;
    font-weight: bold;
    margin-bottom: 2rem;
}

.footer-links {
    display: flex;
    justify-content: center;
    gap: 3rem;
    margin-bottom: 3rem;
}

.footer-link {
    color: rgba(255, 255, 255, 0.7);
    font-size: 1.1rem;
    position: relative;
    display: inline-block;
}

.footer-link::after {
    content: '';
    position: absolute;
    bottom: -5px;
    left: 0;
    width: 0;
    height: 2px;
    background: var(--ara-gradient);
    transition: width 0.3s ease;
}

.footer-link:hover { color: white; }
.footer-link:hover::after { width: 100%; }

.social-links {
    display: flex;
    justify-content: center;
    gap: 2rem;
    margin-bottom: 3rem;
}

.social-icon {
    width: 50px;
    height: 50px;
    border-radius: 50%;
    background: var(--ara-glass);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    cursor: pointer;
}

.social-icon:hover {
    background: var(--ara-gradient);
    box-shadow: 0 10px 25px rgba(102, 126, 234, 0.3);
}

.copyright {
    color: rgba(255, 255, 255, 0.5);
    font-size: 0.9rem;
    margin-bottom: 1rem;
}

/* ===== Responsive ===== */

@media (max-width: 768px) {
    .hero { padding: 0 1rem; }
    .hero-product-tilt { margin-bottom: 2rem; }
    .hero-product { width: 250px; height: 250px; }
    .cta-button { padding: 1rem 2.5rem; font-size: 1rem; }

    .highlights,
    .showcase,
    .testimonials,
    .waitlist { padding: 4rem 1rem; }

    .highlight {
        grid-template-columns: 1fr;
        gap: 2rem;
        margin-bottom: 4rem;
    }
    .highlight.reverse .highlight-image { order: 0; }

    .phone-stage { height: 500px; }
    .phone { width: 160px; height: 320px; }
    .module-button { width: 50px; height: 50px; font-size: 1.2rem; }

    .carousel { height: 300px; }
    .testimonial-card { padding: 2rem; margin: 0 1rem; }
    .testimonial-text { font-size: 1.1rem; }

    .waitlist-form { flex-direction: column; }
    .submit-button { padding: 1.2rem 2rem; }

    .footer { padding: 3rem 1rem 2rem; }
    .footer-links { flex-direction: column; gap: 1.5rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_survives_text_escaping() {
        for forbidden in ['<', '>', '&'] {
            assert!(
                !LANDING_CSS.contains(forbidden),
                "stylesheet must not contain {forbidden:?}"
            );
        }
    }

    #[test]
    fn keyframes_referenced_by_components_exist() {
        for name in [
            "breathe",
            "float",
            "slide-forward",
            "slide-backward",
            "spin",
        ] {
            assert!(
                LANDING_CSS.contains(&format!("@keyframes {name}")),
                "missing keyframes {name}"
            );
        }
    }
}
