mod items_update;
