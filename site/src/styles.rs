//! CSS for the portfolio page.
//!
//! The intro animations are plain CSS keyframes. Their names must match
//! [`TEXT_EXIT_ANIMATION`](crate::components::TEXT_EXIT_ANIMATION) and
//! [`IMAGE_ENTER_ANIMATION`](crate::components::IMAGE_ENTER_ANIMATION):
//! the hero listens for `animationend` with those names to advance the
//! intro.

/// Complete stylesheet, light and dark.
pub const PORTFOLIO_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-card: rgba(255, 255, 255, 0.6);
    --text: #18181b;
    --text-muted: rgba(24, 24, 27, 0.7);
    --border: rgba(24, 24, 27, 0.12);
    --grid-line: rgba(0, 0, 0, 0.06);
    --accent: #2563eb;
    --accent-hover: #1d4ed8;
    --danger: #dc2626;
    --ok: #059669;
    --font-sans: 'Inter', system-ui, sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 72rem;
    --ease-out-expo: cubic-bezier(0.16, 1, 0.3, 1);
}

@media (prefers-color-scheme: dark) {
    :root {
        --bg: #09090b;
        --bg-card: rgba(24, 24, 27, 0.6);
        --text: #f4f4f5;
        --text-muted: rgba(244, 244, 245, 0.7);
        --border: rgba(244, 244, 245, 0.12);
        --grid-line: rgba(255, 255, 255, 0.08);
    }
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    min-height: 100dvh;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font-sans);
    line-height: 1.5;
}

a { color: inherit; text-decoration: none; }

.container { margin: 0 auto; max-width: var(--container-max); padding: 0 1rem; }

.skip-link {
    position: absolute;
    left: -999px;
    top: 0.75rem;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 0.25rem;
    background: var(--bg);
}
.skip-link:focus { left: 0.75rem; z-index: 50; }

/* Navigation */
.nav {
    position: sticky;
    top: 0;
    z-index: 40;
    backdrop-filter: blur(8px);
    background: var(--bg-card);
    border-bottom: 1px solid var(--border);
    animation: nav-drop 0.8s ease-out both;
}
.nav-inner {
    margin: 0 auto;
    max-width: var(--container-max);
    padding: 0 1rem;
    height: 3.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-brand { font-weight: 600; letter-spacing: -0.01em; }
.nav-links { display: flex; gap: 0.25rem; }
.nav-link { padding: 0.5rem 0.75rem; border-radius: 0.75rem; font-size: 0.875rem; }
.nav-link:hover { background: var(--border); }
.nav-menu-btn {
    display: none;
    padding: 0.5rem;
    border: 0;
    border-radius: 0.75rem;
    background: transparent;
    color: inherit;
    cursor: pointer;
}
.nav-drawer {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-top: 1px solid var(--border);
    animation: fade-in 0.3s ease-out both;
}

@media (max-width: 640px) {
    .nav-links { display: none; }
    .nav-menu-btn { display: inline-flex; }
}
@media (min-width: 641px) {
    .nav-drawer { display: none; }
}

/* Hero */
.hero {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 86dvh;
    overflow: hidden;
}
.hero-grid {
    pointer-events: none;
    position: absolute;
    inset: 0;
    background-image:
        linear-gradient(to right, var(--grid-line) 1px, transparent 1px),
        linear-gradient(to bottom, var(--grid-line) 1px, transparent 1px);
    background-size: 24px 24px;
    mask-image: radial-gradient(white, transparent 70%);
}
.hero-text {
    font-family: var(--font-mono);
    font-size: clamp(1.875rem, 6vw, 3.75rem);
    font-weight: 600;
    letter-spacing: -0.02em;
}
.hero-text.zoom-out {
    animation: zoom-text-out 0.9s var(--ease-out-expo) forwards;
}
.cursor {
    display: inline-block;
    width: 2px;
    height: 1.05em;
    margin-left: 0.125rem;
    vertical-align: -0.15em;
    background: currentColor;
    animation: cursor-pulse 1s ease-in-out infinite;
}
.hero-image {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    animation: zoom-image-in 0.9s var(--ease-out-expo) both;
}
.hero-portrait {
    width: clamp(10rem, 24vw, 15rem);
    height: clamp(10rem, 24vw, 15rem);
    border-radius: 9999px;
    overflow: hidden;
    border: 1px solid var(--border);
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
}
.hero-portrait img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    user-select: none;
    pointer-events: none;
    animation: float 3s ease-in-out infinite;
}
.hero-details {
    position: absolute;
    bottom: 2.5rem;
    left: 50%;
    transform: translateX(-50%);
    text-align: center;
    padding: 0 1rem;
    animation: fade-up 0.6s ease-out 0.05s both;
}
.hero-role { margin: 0; font-size: 1.125rem; font-weight: 500; }
.hero-location { margin: 0.25rem 0 0; font-size: 0.875rem; color: var(--text-muted); }
.hero-links {
    margin-top: 1rem;
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
}
.pill-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    font-size: 0.875rem;
}

/* Sections */
.reveal { animation: fade-up 0.8s ease-out both; }
.section { scroll-margin-top: 6rem; padding: 3rem 0; }
.section-header { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; }
.section-icon { padding: 0.5rem; border-radius: 1rem; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.08); }
.section-title { margin: 0; font-size: 1.75rem; font-weight: 600; letter-spacing: -0.01em; }

.grid { display: grid; gap: 1rem; }
@media (min-width: 641px) {
    .grid-2, .grid-3 { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1024px) {
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
}

.card {
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-radius: 1rem;
    background: var(--bg-card);
    backdrop-filter: blur(8px);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: box-shadow 0.2s;
}
.card:hover { box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08); }
.card-heading { margin: 0 0 0.75rem; font-weight: 500; }
.card-title { margin: 0; display: flex; align-items: center; gap: 0.5rem; font-size: 1.125rem; font-weight: 600; }
.card-row { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 0.5rem; }
.muted, .period { color: var(--text-muted); }
.period { font-size: 0.875rem; white-space: nowrap; }
.credential { margin-top: 0.25rem; }
.summary { margin: 0.5rem 0 0.75rem; font-size: 0.875rem; }
.bullets { margin: 0.75rem 0 0; padding-left: 1.25rem; }
.about-text { margin: 0; text-wrap: balance; }

.tag-list { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tag {
    display: inline-flex;
    align-items: center;
    padding: 0.25rem 0.5rem;
    border: 1px solid var(--border);
    border-radius: 9999px;
    font-size: 0.8125rem;
}
.project-links { margin-top: 1rem; display: flex; gap: 0.75rem; }
.project-link { display: inline-flex; align-items: center; gap: 0.25rem; font-size: 0.875rem; text-decoration: underline; }

/* Contact */
.contact-form { display: grid; gap: 1rem; }
.field-label { display: block; margin-bottom: 0.25rem; font-size: 0.875rem; font-weight: 500; }
.field input, .field textarea {
    width: 100%;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    background: var(--bg-card);
    color: inherit;
    font: inherit;
}
.field input:focus, .field textarea:focus { outline: 2px solid var(--accent); }
.btn-primary {
    justify-self: start;
    padding: 0.5rem 1rem;
    border: 0;
    border-radius: 0.5rem;
    background: var(--accent);
    color: #ffffff;
    font-weight: 500;
    cursor: pointer;
}
.btn-primary:hover { background: var(--accent-hover); }
.btn-primary:disabled { opacity: 0.6; cursor: progress; }
.notice { margin: 0; font-size: 0.875rem; }
.notice-ok { color: var(--ok); }
.notice-error { color: var(--danger); }

.footer { padding: 2.5rem 0; text-align: center; font-size: 0.875rem; opacity: 0.7; }

.load-error { max-width: 40rem; margin: 4rem auto; padding: 1.5rem; border: 1px solid var(--danger); border-radius: 1rem; }

/* Animations */
@keyframes zoom-text-out {
    from { transform: scale(1); opacity: 1; }
    to { transform: scale(10); opacity: 0; }
}
@keyframes zoom-image-in {
    from { transform: scale(1.15); opacity: 0; }
    to { transform: scale(1); opacity: 1; }
}
@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-8px); }
}
@keyframes cursor-pulse {
    0%, 100% { background: currentColor; }
    50% { background: transparent; }
}
@keyframes fade-up {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes nav-drop {
    from { transform: translateY(-40px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}

@media (prefers-reduced-motion: reduce) {
    .hero-portrait img, .cursor { animation: none; }
}
"#;
