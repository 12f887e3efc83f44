use std::cell::RefCell;
use std::rc::Rc;

use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;

use crate::app::ComposeState;

pub fn show_compose_window(app: &Application) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("ZapSend")
        .default_width(420)
        .default_height(480)
        .resizable(false)
        .build();

    let state = Rc::new(RefCell::new(ComposeState::default()));

    let toast_overlay = adw::ToastOverlay::new();

    // Root container
    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_margin_top(24);
    root.set_margin_bottom(24);
    root.set_margin_start(24);
    root.set_margin_end(24);

    // Title
    let title = gtk::Label::new(Some("Send a WhatsApp message"));
    title.add_css_class("title-2");
    title.set_halign(gtk::Align::Start);
    root.append(&title);

    let subtitle = gtk::Label::new(Some("Opens WhatsApp with the message pre-filled"));
    subtitle.add_css_class("dim-label");
    subtitle.set_halign(gtk::Align::Start);
    root.append(&subtitle);

    // Phone field, with the country prefix shown outside the entry
    let phone_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    let prefix = gtk::Label::new(Some("+55"));
    prefix.add_css_class("dim-label");
    let phone_entry = gtk::Entry::new();
    phone_entry.set_placeholder_text(Some("(31) 99999-9999"));
    phone_entry.set_input_purpose(gtk::InputPurpose::Phone);
    phone_entry.set_max_length(15);
    phone_entry.set_hexpand(true);
    phone_row.append(&prefix);
    phone_row.append(&phone_entry);
    root.append(&phone_row);

    // Message field
    let message_view = gtk::TextView::new();
    message_view.set_wrap_mode(gtk::WrapMode::WordChar);
    message_view.set_top_margin(8);
    message_view.set_bottom_margin(8);
    message_view.set_left_margin(8);
    message_view.set_right_margin(8);
    let message_scroller = gtk::ScrolledWindow::builder()
        .min_content_height(120)
        .vexpand(true)
        .build();
    message_scroller.set_child(Some(&message_view));
    message_scroller.add_css_class("frame");
    root.append(&message_scroller);

    let char_count = gtk::Label::new(Some("0 characters"));
    char_count.add_css_class("dim-label");
    char_count.set_halign(gtk::Align::End);
    root.append(&char_count);

    // Validation error, hidden until a submit fails
    let error_label = gtk::Label::new(None);
    error_label.add_css_class("error");
    error_label.set_halign(gtk::Align::Start);
    error_label.set_visible(false);
    root.append(&error_label);

    // Send button
    let send_btn = gtk::Button::with_label("Send Message");
    send_btn.add_css_class("suggested-action");
    send_btn.set_halign(gtk::Align::End);
    send_btn.set_sensitive(false);
    root.append(&send_btn);

    let footer = gtk::Label::new(Some("You will be redirected to WhatsApp."));
    footer.add_css_class("dim-label");
    footer.set_halign(gtk::Align::Center);
    root.append(&footer);

    toast_overlay.set_child(Some(&root));
    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let header_title = gtk::Label::new(Some("ZapSend"));
    header.set_title_widget(Some(&header_title));
    container.append(&header);
    container.append(&toast_overlay);
    window.set_content(Some(&container));

    // Syncs the widgets that derive from state: the error row and the send
    // button's enabled flag.
    let refresh: Rc<dyn Fn()> = {
        let state = state.clone();
        let error_label = error_label.clone();
        let send_btn = send_btn.clone();
        Rc::new(move || {
            let state = state.borrow();
            match state.error {
                Some(err) => {
                    error_label.set_label(&err.to_string());
                    error_label.set_visible(true);
                }
                None => error_label.set_visible(false),
            }
            send_btn.set_sensitive(state.is_submittable() && !state.sending);
        })
    };

    // Reformat the phone number on every keystroke. Writing the formatted
    // text back re-fires this handler; the formatter is idempotent, so the
    // nested pass finds nothing to change and stops there.
    {
        let state = state.clone();
        let refresh = refresh.clone();
        phone_entry.connect_changed(move |entry| {
            let formatted = {
                let mut state = state.borrow_mut();
                state.edit_phone(&entry.text());
                state.phone.clone()
            };
            if entry.text().as_str() != formatted {
                entry.set_text(&formatted);
                entry.set_position(-1);
            }
            refresh();
        });
    }

    {
        let state = state.clone();
        let refresh = refresh.clone();
        let char_count = char_count.clone();
        message_view.buffer().connect_changed(move |buffer| {
            let text = buffer.text(&buffer.start_iter(), &buffer.end_iter(), false);
            state.borrow_mut().edit_message(&text);
            char_count.set_label(&format!("{} characters", text.chars().count()));
            refresh();
        });
    }

    // Validate and hand the link to the default URI handler. The launch has
    // to happen inside this click dispatch, not from an idle or a timeout.
    let on_send: Rc<dyn Fn()> = {
        let state = state.clone();
        let refresh = refresh.clone();
        let window = window.clone();
        let overlay = toast_overlay.clone();
        let phone_entry = phone_entry.clone();
        let send_btn = send_btn.clone();
        Rc::new(move || {
            send_btn.set_label("Opening WhatsApp…");
            let (result, phone_text) = {
                let mut state = state.borrow_mut();
                let result = state.submit(|url| {
                    gtk::show_uri(Some(&window), url.as_str(), gtk::gdk::CURRENT_TIME);
                });
                (result, state.phone.clone())
            };
            send_btn.set_label("Send Message");
            match result {
                Ok(()) => {
                    if phone_entry.text().as_str() != phone_text {
                        phone_entry.set_text(&phone_text);
                    }
                    overlay.add_toast(adw::Toast::new("Opening WhatsApp…"));
                }
                Err(err) => log::debug!("submit rejected: {err}"),
            }
            refresh();
        })
    };

    // Button click
    {
        let on_send = on_send.clone();
        send_btn.connect_clicked(move |_| (on_send)());
    }
    // Enter in the phone entry submits too
    {
        let on_send = on_send.clone();
        phone_entry.connect_activate(move |_| (on_send)());
    }

    window.present();
}
