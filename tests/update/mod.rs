mod path_format_controls_entry_prefix;
mod rescan_replaces_the_previous_list;
mod update_outside_a_repository_fails;
mod update_writes_markers_of_every_comment_style;
mod update_without_markers_deletes_the_list;
