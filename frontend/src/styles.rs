use portfolio_shared::ThemeMode;

pub const PAGE: &str = "min-h-screen transition-colors duration-300 selection:bg-blue-500/30";
pub const CONTAINER: &str = "container mx-auto max-w-[1400px] px-6 lg:px-12 relative z-10";
pub const SECTION: &str = "py-24 lg:py-40 relative overflow-hidden";

pub const EYEBROW: &str = "text-blue-500 font-black tracking-[6px] text-xs uppercase mb-4 block";
pub const HEADING: &str = "font-black text-5xl md:text-7xl tracking-tighter leading-[0.9] mb-8 transition-colors";
pub const GRADIENT_TEXT: &str = "text-transparent bg-clip-text bg-gradient-to-r from-blue-500 to-purple-500";
pub const LEAD: &str = "max-w-lg text-lg leading-relaxed transition-colors opacity-80";

pub const NAV: &str = "fixed top-0 left-0 w-full z-[1000] transition-all duration-300 ease-in-out hidden md:block";
pub const NAV_INNER: &str = "max-w-[1400px] w-full mx-auto px-4 flex justify-between items-center h-full";
pub const NAV_LINK: &str = "text-[13px] font-semibold transition-all duration-300 relative uppercase tracking-wider group";
pub const NAV_UNDERLINE: &str = "absolute -bottom-1 left-0 w-0 h-[2px] bg-blue-500 transition-all duration-300 group-hover:w-full";
pub const NAV_BRAND: &str = "text-2xl font-extrabold tracking-tighter flex items-baseline transition-colors";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center gap-2 bg-blue-500 text-white px-6 py-3 rounded-xl font-bold text-sm transition-all duration-300 hover:scale-105 hover:bg-blue-400 shadow-[0_4px_12px_rgba(59,130,246,0.3)] hover:shadow-[0_8px_16px_rgba(59,130,246,0.4)]";
pub const BUTTON_ICON: &str = "p-2.5 rounded-xl border transition-all active:scale-95 group";

pub const BADGE: &str = "text-[10px] font-black px-2.5 py-1 rounded-lg uppercase tracking-wider border transition-all";

pub const MODAL_BACKDROP: &str = "fixed inset-0 z-[1100] bg-black/80 backdrop-blur-md overflow-y-auto";
pub const MODAL_PANEL: &str = "relative transform overflow-hidden rounded-3xl text-left shadow-xl transition-all w-full max-w-3xl border";

pub const FOOTER: &str = "w-full border-t py-8 md:py-6 relative transition-colors duration-300";
pub const FOOTER_LINK: &str = "text-[13px] font-bold uppercase tracking-wider hover:text-blue-500 transition-colors duration-200";

pub fn page_surface(mode: ThemeMode) -> &'static str {
    mode.pick("bg-slate-50 text-slate-900", "bg-[#030712] text-slate-100")
}

pub fn text_primary(mode: ThemeMode) -> &'static str {
    mode.pick("text-slate-900", "text-slate-50")
}

pub fn text_secondary(mode: ThemeMode) -> &'static str {
    mode.pick("text-slate-600", "text-slate-400")
}

pub fn divider(mode: ThemeMode) -> &'static str {
    mode.pick("border-slate-200", "border-white/10")
}

pub fn nav_surface(mode: ThemeMode, scrolled: bool) -> String {
    if scrolled {
        format!("{} backdrop-blur-xl border-b {} h-16", mode.pick("bg-white/80", "bg-[#030712]/80"), divider(mode))
    } else {
        "bg-transparent h-[72px]".to_string()
    }
}

pub fn card(mode: ThemeMode) -> &'static str {
    mode.pick(
        "bg-white border-slate-200/60 shadow-[0_20px_50px_rgba(0,0,0,0.03)]",
        "bg-white/[0.03] border-white/10",
    )
}

pub fn chip(mode: ThemeMode) -> &'static str {
    mode.pick(
        "bg-slate-50 border-slate-100 text-slate-700 hover:border-blue-500/20 hover:bg-slate-100",
        "bg-white/5 border-white/5 text-slate-200 hover:border-white/20 hover:bg-white/10",
    )
}

pub fn tag(mode: ThemeMode) -> &'static str {
    mode.pick("text-blue-600 border-blue-600/10 bg-blue-50", "text-blue-400 border-blue-400/20 bg-blue-500/5")
}

pub fn icon_button(mode: ThemeMode) -> &'static str {
    mode.pick(
        "bg-white border-slate-200 text-slate-900 hover:border-blue-500/50",
        "bg-slate-900 border-white/10 text-slate-50 hover:border-blue-500/50",
    )
}

pub fn modal_panel(mode: ThemeMode) -> &'static str {
    mode.pick("bg-white border-slate-200", "bg-slate-900 border-white/10")
}

/// Hex background of the bubble menu, matching the page surface.
pub fn menu_colors(mode: ThemeMode) -> (&'static str, &'static str) {
    mode.pick(("#FFFFFF", "#0F172A"), ("#0F172A", "#F8FAFC"))
}
